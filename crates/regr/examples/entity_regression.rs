//! Entity Regression Examples
//!
//! This example demonstrates the regression workflows:
//! - Basic fitting over a labeled entity collection
//! - Missing and non-numeric attributes being excluded
//! - Degenerate inputs reported as typed errors
//! - The constant-Y policy for partial results
//! - Fitting pre-extracted pair sequences
//!
//! Each scenario includes the expected outcome as comments.

#[cfg(feature = "std")]
use regr::prelude::*;

#[cfg(feature = "std")]
fn main() -> Result<(), RegrError> {
    println!("{}", "=".repeat(72));
    println!("Entity Regression - Examples");
    println!("{}", "=".repeat(72));
    println!();

    example_1_basic_fit()?;
    example_2_sparse_attributes()?;
    example_3_degenerate_input()?;
    example_4_constant_y_policy()?;
    example_5_pair_sequences()?;

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
/// Example 1: Basic Fit
/// Fit city population against area over a labeled collection.
fn example_1_basic_fit() -> Result<(), RegrError> {
    println!("Example 1: Basic Fit");
    println!("{}", "-".repeat(72));

    let cities = vec![
        Entity::new("CITY").with("area", 10.0).with("population", 21_000.0),
        Entity::new("CITY").with("area", 25.0).with("population", 52_500.0),
        Entity::new("CITY").with("area", 40.0).with("population", 81_000.0),
        Entity::new("CITY").with("area", 55.0).with("population", 112_000.0),
    ];

    let model: RegrModel<f64> = Regr::new()
        .x_attribute("area")
        .y_attribute("population")
        .label("CITY")
        .build()?;

    let result = model.fit(&cities)?;
    println!("{result}");
    // Slope near 2000 people per unit of area, r2 close to 1.

    Ok(())
}

#[cfg(feature = "std")]
/// Example 2: Sparse Attributes
/// Entities missing either attribute are excluded, not errored on.
fn example_2_sparse_attributes() -> Result<(), RegrError> {
    println!("Example 2: Sparse Attributes");
    println!("{}", "-".repeat(72));

    let readings = vec![
        Entity::new("SENSOR").with("temp", 20.0).with("power", 1.2),
        Entity::new("SENSOR").with("temp", 25.0).with("power", 1.9),
        Entity::new("SENSOR").with("temp", 30.0), // power reading lost
        Entity::new("SENSOR").with("power", 2.4), // temp reading lost
        Entity::new("SENSOR").with("temp", "hot").with("power", 2.6),
        Entity::new("SENSOR").with("temp", 35.0).with("power", 3.1),
    ];

    let model: RegrModel<f64> = Regr::new().x_attribute("temp").y_attribute("power").build()?;
    let result = model.fit(&readings)?;

    println!(
        "fitted {} pairs, excluded {} incomplete readings",
        result.pairs_used, result.excluded
    );
    println!();
    // 3 pairs fitted, 3 readings excluded.

    Ok(())
}

#[cfg(feature = "std")]
/// Example 3: Degenerate Input
/// Too little data and zero variance surface as typed errors.
fn example_3_degenerate_input() -> Result<(), RegrError> {
    println!("Example 3: Degenerate Input");
    println!("{}", "-".repeat(72));

    let model: RegrModel<f64> = Regr::new().x_attribute("x").y_attribute("y").build()?;

    match model.fit_pairs([(5.0, 5.0)]) {
        Err(e) => println!("single point:  {e}"),
        Ok(_) => unreachable!(),
    }
    // single point:  Insufficient data: 1 valid pairs, need at least 2

    match model.fit_pairs([(1.0, 1.0), (1.0, 2.0), (1.0, 3.0)]) {
        Err(e) => println!("constant x:    {e}"),
        Ok(_) => unreachable!(),
    }
    // constant x:    Zero variance in x across 3 pairs: slope is undefined

    println!();
    Ok(())
}

#[cfg(feature = "std")]
/// Example 4: Constant-Y Policy
/// Opt into reporting the flat line when only R² is undefined.
fn example_4_constant_y_policy() -> Result<(), RegrError> {
    println!("Example 4: Constant-Y Policy");
    println!("{}", "-".repeat(72));

    let model: RegrModel<f64> = Regr::new()
        .x_attribute("x")
        .y_attribute("y")
        .on_constant_y(SlopeOnly)
        .build()?;

    let result = model.fit_pairs([(1.0, 4.0), (2.0, 4.0), (3.0, 4.0)])?;
    println!(
        "slope = {}, intercept = {}, r2 reported: {}",
        result.slope,
        result.intercept,
        result.has_r2()
    );
    println!();
    // slope = 0, intercept = 4, r2 reported: false

    Ok(())
}

#[cfg(feature = "std")]
/// Example 5: Pair Sequences
/// Callers that already hold (x, y) observations skip the entity layer.
fn example_5_pair_sequences() -> Result<(), RegrError> {
    println!("Example 5: Pair Sequences");
    println!("{}", "-".repeat(72));

    let model: RegrModel<f64> = Regr::new().x_attribute("x").y_attribute("y").build()?;
    let result = model.fit_pairs([(1.0, 1.0), (2.0, 3.0), (3.0, 6.0)])?;

    println!("{result}");
    // Slope 2.5, intercept -1.667, r2 0.987.

    Ok(())
}
