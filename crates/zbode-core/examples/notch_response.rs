//! Compute the stock notch filter and print result excerpts
//!
//! Run with: cargo run --example notch_response -p zbode-core

use zbode_core::prelude::*;

fn main() -> ZResult<()> {
    // notch at 0.142797 rad/sample, swept from 100 Hz at 44.1 kHz
    let tf = TransferFunction::parse("0.00439456;(1,2,1)", "1,-1.734834,0.752412")?;
    let config = SweepConfig::default();
    println!("{}", tf);

    let sweep = FrequencyResponse::compute(&tf, &config)?;
    let (re_min, re_max) = sweep.real_extrema().range().unwrap();
    println!("real part spans {:.6} .. {:.6}", re_min, re_max);

    let table = frequency_table(&sweep, &config);
    for line in table.lines().take(6) {
        println!("{}", line);
    }
    println!("... ({} rows)", sweep.response().len());

    let time = TimeResponse::compute(&tf)?;
    let table = time_table(&time, config.sample_rate);
    for line in table.lines().take(6) {
        println!("{}", line);
    }
    println!("... ({} rows)", time.impulse().len());
    Ok(())
}
