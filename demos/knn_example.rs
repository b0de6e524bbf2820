use ndarray::array;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use statlearn::{DEFAULT_K, Dataset, KnnClassifier, Matrix};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== k-Nearest-Neighbor Classification ===\n");

    let mut rng = StdRng::seed_from_u64(99);
    let n_per_class = 25;

    // Two Gaussian blobs in the plane, centered at (0, 0) and (4, 4).
    let n = 2 * n_per_class;
    let jitter = Matrix::random_using((n, 2), Normal::new(0.0, 0.8)?, &mut rng);
    let mut features = Matrix::zeros((n, 2));
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let center = if i < n_per_class { 0.0 } else { 4.0 };
        features[(i, 0)] = center + jitter[(i, 0)];
        features[(i, 1)] = center + jitter[(i, 1)];
        labels.push(if i < n_per_class { "low" } else { "high" });
    }

    let dataset = Dataset::new(features, labels)?.shuffled(&mut rng);
    let (train, test) = dataset.train_test_split(0.2)?;
    println!(
        "Split: {} training samples, {} test samples, k = {}\n",
        train.n_samples(),
        test.n_samples(),
        DEFAULT_K
    );

    let classifier = KnnClassifier::from_dataset(&train, DEFAULT_K)?;

    for query in [array![0.5, -0.5], array![2.0, 2.0], array![4.5, 3.5]] {
        let label = classifier.classify(&query)?;
        println!("query {:>12} -> {}", format!("{:.1}", query), label);
    }
    println!();

    println!(
        "training error (self-match included): {:.3}",
        classifier.train_error()?
    );
    println!(
        "training error (leave-self-out):      {:.3}",
        classifier.clone().skip_nearest(true).train_error()?
    );
    println!(
        "test error on held-out set:           {:.3}",
        classifier.test_error(&test.features, &test.targets)?
    );

    Ok(())
}
