use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Normal;
use rand::SeedableRng;
use rand::rngs::StdRng;
use statlearn::{Dataset, FitMethod, LinearModel, Matrix, Vector};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Linear Regression: Ordinary vs Ridge ===\n");

    let mut rng = StdRng::seed_from_u64(1234);
    let n = 40;

    // True relationship: y = 1 + 1.2*trend + 0.8*log(size) + noise.
    // The size column is generated on an exponential scale and
    // log-transformed before modeling, the way a skewed predictor would
    // be treated in practice.
    let trend = Array1::linspace(1.0, 10.0, n);
    let log_size =
        trend.mapv(|t| 2.0 + 0.3 * t) + Array1::random_using(n, Normal::new(0.0, 1.0)?, &mut rng);
    let size = log_size.mapv(f64::exp);
    let noise = Array1::random_using(n, Normal::new(0.0, 0.4)?, &mut rng);

    let mut features = Matrix::zeros((n, 3));
    for i in 0..n {
        features[(i, 0)] = 1.0;
        features[(i, 1)] = trend[i];
        features[(i, 2)] = size[i].ln();
    }
    let targets: Vec<f64> = (0..n)
        .map(|i| 1.0 + 1.2 * trend[i] + 0.8 * features[(i, 2)] + noise[i])
        .collect();

    println!(
        "Training data: {} samples, {} predictors (intercept column included)",
        n, features.ncols()
    );
    println!("True relationship: y = 1 + 1.2*trend + 0.8*log(size) + noise\n");

    let dataset = Dataset::new(features, targets)?.shuffled(&mut rng);
    let (train, test) = dataset.train_test_split(0.25)?;
    println!(
        "Split: {} training samples, {} test samples\n",
        train.n_samples(),
        test.n_samples()
    );

    // The estimation method can come from configuration as a plain name.
    let method: FitMethod = "ordinary".parse()?;
    let mut model = LinearModel::from_dataset(&train)?;
    model.fit(method)?;

    let coefficients = model.coefficients().expect("model was just fitted");
    println!("Ordinary least squares:");
    println!("  coefficients: {:.4}", coefficients);
    println!("  training MSE: {:.4}", model.mse()?);
    println!("  training R²:  {:.4}", model.r_squared()?);
    let held_out = Vector::from(test.targets.clone());
    println!("  held-out R²:  {:.4}\n", model.score(&test.features, &held_out)?);

    println!("Ridge at increasing shrinkage:");
    for shrinkage in [0.0, 0.1, 1.0, 10.0, 100.0] {
        model.fit(FitMethod::Ridge { shrinkage })?;
        let coefficients = model.coefficients().expect("model was just fitted");
        println!(
            "  h = {:>6.1}: coefficients {:.4}, held-out R² {:.4}",
            shrinkage,
            coefficients,
            model.score(&test.features, &held_out)?
        );
    }

    println!("\nDone.");
    Ok(())
}
