//! Profiles command implementation.

use anyhow::Result;
use xferplan_lib::prelude::*;

/// List network profile presets and the parameters they imply.
pub(crate) fn list_profiles() -> Result<()> {
    println!(
        "{:<14} {:>9} {:>12} {:>9} {:>8} {:>11}  {}",
        "PROFILE", "OVERHEAD", "COMPRESSION", "EFFICACY", "STREAMS", "STREAM EFF", "DESCRIPTION"
    );
    println!("{}", "-".repeat(100));

    for profile in NetworkProfile::all() {
        let defaults = profile.defaults();
        let params = defaults.params;
        println!(
            "{:<14} {:>8.0}% {:>11.0}% {:>9.2} {:>8} {:>11.2}  {}",
            profile.as_str(),
            params.overhead * 100.0,
            params.compression * 100.0,
            params.parallelism_efficacy,
            defaults.parallelism,
            params.stream_efficiency,
            profile.description()
        );
    }

    println!("\nTotal: {} profiles", NetworkProfile::all().len());
    Ok(())
}
