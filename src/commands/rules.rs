use anyhow::Result;

use crate::core::RuleId;
use crate::rules::{default_severity, description};

pub fn run() -> Result<()> {
    for rule in RuleId::ALL {
        println!(
            "{:30} {:5} {}",
            rule.name(),
            default_severity(rule).to_string(),
            description(rule)
        );
    }
    Ok(())
}
