//! Report configuration.
//!
//! Options can be built in code with the `with_*` helpers or loaded from a
//! TOML file such as:
//!
//! ```toml
//! sort_method = "self_time"
//! min_percent = 1.5
//! print_file = true
//! name_style = "short"
//! ```

use crate::profile::Method;
use crate::utils::config::DEFAULT_MIN_PERCENT;
use crate::utils::error::{ConfigError, ReportError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Key used to order the method table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMethod {
    #[default]
    TotalTime,
    SelfTime,
    WaitTime,
    ChildrenTime,
    Called,
}

/// Ascending comparison between two methods
pub type MethodOrdering = fn(&Method, &Method) -> Ordering;

impl SortMethod {
    /// Name shown in the report header
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMethod::TotalTime => "total_time",
            SortMethod::SelfTime => "self_time",
            SortMethod::WaitTime => "wait_time",
            SortMethod::ChildrenTime => "children_time",
            SortMethod::Called => "called",
        }
    }

    /// Resolve the key to its comparison function
    pub fn comparator(&self) -> MethodOrdering {
        match self {
            SortMethod::TotalTime => by_total_time,
            SortMethod::SelfTime => by_self_time,
            SortMethod::WaitTime => by_wait_time,
            SortMethod::ChildrenTime => by_children_time,
            SortMethod::Called => by_called,
        }
    }
}

fn by_total_time(a: &Method, b: &Method) -> Ordering {
    a.total_time.total_cmp(&b.total_time)
}

fn by_self_time(a: &Method, b: &Method) -> Ordering {
    a.self_time.total_cmp(&b.self_time)
}

fn by_wait_time(a: &Method, b: &Method) -> Ordering {
    a.wait_time.total_cmp(&b.wait_time)
}

fn by_children_time(a: &Method, b: &Method) -> Ordering {
    a.children_time.total_cmp(&b.children_time)
}

fn by_called(a: &Method, b: &Method) -> Ordering {
    a.called.cmp(&b.called)
}

impl fmt::Display for SortMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortMethod {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "total_time" => Ok(SortMethod::TotalTime),
            "self_time" => Ok(SortMethod::SelfTime),
            "wait_time" => Ok(SortMethod::WaitTime),
            "children_time" => Ok(SortMethod::ChildrenTime),
            "called" => Ok(SortMethod::Called),
            other => Err(ReportError::InvalidConfig(format!(
                "Unknown sort method: {}",
                other
            ))),
        }
    }
}

/// Built-in display styles for method names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStyle {
    /// `Module::Klass#method`
    #[default]
    Full,
    /// `Klass#method`
    Short,
}

/// Strategy turning a method into the name shown on its own row
pub type NameFormatter = Arc<dyn Fn(&Method) -> String + Send + Sync>;

/// Fully-qualified name, as recorded by the profiler
pub fn full_name(method: &Method) -> String {
    method.full_name.clone()
}

/// Name with its namespace path dropped
///
/// Separators inside `<...>` belong to a singleton receiver such as
/// `<Class::Array>#new` and are kept.
pub fn short_name(method: &Method) -> String {
    let name = &method.full_name;
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in name.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ':' if depth == 0 && name[i + 1..].starts_with(':') => start = i + 2,
            _ => {}
        }
    }

    name[start..].to_string()
}

impl NameStyle {
    pub fn formatter(&self) -> NameFormatter {
        match self {
            NameStyle::Full => Arc::new(full_name),
            NameStyle::Short => Arc::new(short_name),
        }
    }
}

/// Options recognized by the graph printer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    pub sort_method: SortMethod,

    /// Methods below this share of the thread's total time are omitted
    pub min_percent: f64,

    /// Append `file:line` to each method row
    pub print_file: bool,

    pub name_style: NameStyle,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            sort_method: SortMethod::TotalTime,
            min_percent: DEFAULT_MIN_PERCENT,
            print_file: false,
            name_style: NameStyle::Full,
        }
    }
}

impl ReportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort_method(mut self, sort_method: SortMethod) -> Self {
        self.sort_method = sort_method;
        self
    }

    pub fn with_min_percent(mut self, min_percent: f64) -> Self {
        self.min_percent = min_percent;
        self
    }

    pub fn with_print_file(mut self, print_file: bool) -> Self {
        self.print_file = print_file;
        self
    }

    pub fn with_name_style(mut self, name_style: NameStyle) -> Self {
        self.name_style = name_style;
        self
    }

    /// Reject values no report could be rendered with
    pub fn validate(&self) -> Result<(), ReportError> {
        if !self.min_percent.is_finite() {
            return Err(ReportError::InvalidConfig(format!(
                "min_percent must be a finite number, got {}",
                self.min_percent
            )));
        }
        Ok(())
    }

    /// Load and validate options from a TOML file
    ///
    /// Missing keys fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let options: ReportOptions = toml::from_str(&contents)?;
        options.validate()?;
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(name: &str, total: f64, self_time: f64, called: u64) -> Method {
        Method {
            full_name: name.to_string(),
            total_time: total,
            self_time,
            children_time: total - self_time,
            called,
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_method_names_round_trip() {
        for sort in [
            SortMethod::TotalTime,
            SortMethod::SelfTime,
            SortMethod::WaitTime,
            SortMethod::ChildrenTime,
            SortMethod::Called,
        ] {
            assert_eq!(sort.as_str().parse::<SortMethod>().unwrap(), sort);
        }
        assert!("bogus".parse::<SortMethod>().is_err());
    }

    #[test]
    fn test_comparators() {
        let a = method("A#a", 10.0, 1.0, 7);
        let b = method("B#b", 5.0, 4.0, 2);

        assert_eq!(SortMethod::TotalTime.comparator()(&a, &b), Ordering::Greater);
        assert_eq!(SortMethod::SelfTime.comparator()(&a, &b), Ordering::Less);
        assert_eq!(SortMethod::Called.comparator()(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_short_name() {
        let m = method("Outer::Inner::Klass#run", 1.0, 1.0, 1);
        assert_eq!(short_name(&m), "Klass#run");
        assert_eq!(full_name(&m), "Outer::Inner::Klass#run");

        let plain = method("Kernel#puts", 1.0, 1.0, 1);
        assert_eq!(short_name(&plain), "Kernel#puts");
    }

    #[test]
    fn test_short_name_keeps_singleton_receiver() {
        let singleton = method("<Class::Array>#new", 1.0, 1.0, 1);
        assert_eq!(short_name(&singleton), "<Class::Array>#new");

        let nested = method("Outer::<Class::Inner::Klass>#build", 1.0, 1.0, 1);
        assert_eq!(short_name(&nested), "<Class::Inner::Klass>#build");
    }

    #[test]
    fn test_validate_rejects_nan() {
        let options = ReportOptions::new().with_min_percent(f64::NAN);
        assert!(matches!(
            options.validate(),
            Err(ReportError::InvalidConfig(_))
        ));
        assert!(ReportOptions::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let options: ReportOptions = toml::from_str("min_percent = 2.5").unwrap();

        assert_eq!(options.min_percent, 2.5);
        assert_eq!(options.sort_method, SortMethod::TotalTime);
        assert!(!options.print_file);
        assert_eq!(options.name_style, NameStyle::Full);
    }
}
