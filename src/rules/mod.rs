pub mod immutable_reduce;
pub mod prefer_array_from;
pub mod prefer_filter_first;
pub mod prefer_layout_effect;
pub mod quadratic_loop_ops;
pub mod unnecessary_array_spread;

use std::collections::HashMap;

use crate::analysis::Engine;
use crate::core::ast::Ast;
use crate::core::{Diagnostic, RuleId, Severity};

pub fn description(rule: RuleId) -> &'static str {
    match rule {
        RuleId::NoImmutableReduce => {
            "Spreading or concatenating the accumulator in a reduce callback rebuilds it every iteration"
        }
        RuleId::NoQuadraticLoopOperations => {
            "shift()/unshift() on an array carried across loop iterations repositions every element each pass"
        }
        RuleId::NoUnnecessaryArraySpread => {
            "Copying an array with spread just to chain a method iterates it twice"
        }
        RuleId::PreferFilterFirst => {
            "Filtering before mapping reduces the iterations the map runs over"
        }
        RuleId::PreferArrayFrom => {
            "Array.from(a, b) avoids the extra pass of Array.from(a).map(b)"
        }
        RuleId::PreferLayoutEffect => {
            "Reading layout from the DOM belongs in useLayoutEffect, not useEffect"
        }
    }
}

pub fn default_severity(rule: RuleId) -> Severity {
    match rule {
        RuleId::NoImmutableReduce
        | RuleId::NoQuadraticLoopOperations
        | RuleId::NoUnnecessaryArraySpread
        | RuleId::PreferFilterFirst
        | RuleId::PreferArrayFrom
        | RuleId::PreferLayoutEffect => Severity::Warn,
    }
}

/// Which rules run and at what severity. Absent rules are off.
#[derive(Clone, Debug)]
pub struct RuleSettings {
    levels: HashMap<RuleId, Severity>,
}

impl RuleSettings {
    pub fn defaults() -> Self {
        Self {
            levels: RuleId::ALL
                .iter()
                .map(|&rule| (rule, default_severity(rule)))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            levels: HashMap::new(),
        }
    }

    /// All rules off except `rule` at its default severity.
    pub fn single(rule: RuleId) -> Self {
        let mut settings = Self::empty();
        settings.set(rule, default_severity(rule));
        settings
    }

    pub fn set(&mut self, rule: RuleId, severity: Severity) {
        self.levels.insert(rule, severity);
    }

    pub fn disable(&mut self, rule: RuleId) {
        self.levels.remove(&rule);
    }

    /// Keeps only the listed rules enabled.
    pub fn retain(&mut self, keep: &[RuleId]) {
        self.levels.retain(|rule, _| keep.contains(rule));
    }

    pub fn severity(&self, rule: RuleId) -> Option<Severity> {
        self.levels.get(&rule).copied()
    }

    pub fn is_enabled(&self, rule: RuleId) -> bool {
        self.levels.contains_key(&rule)
    }
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Runs a single rule over a parsed file.
pub fn run_rule(rule: RuleId, ast: &Ast) -> Vec<Diagnostic> {
    Engine::analyze(ast, &RuleSettings::single(rule))
}
