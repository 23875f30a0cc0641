//! Tests for the default pass and caller overrides.

use std::time::Duration;

use anyhow::{Result, anyhow, ensure};
use envcfg::{EnvCfg, EnvCfgError, Overrides, ParseError};
use rstest::rstest;

#[derive(Debug, Default, EnvCfg)]
struct Defaults {
    #[envcfg(default = "foo")]
    pub s: String,
    #[envcfg(default = 42)]
    pub n: i32,
    #[envcfg(default = true)]
    pub b: bool,
    #[envcfg(default = "1m")]
    pub d: Duration,
    #[envcfg(default = 36.6)]
    pub f: f64,
    #[envcfg(default = "1,2,3,4")]
    pub list: Vec<i32>,
    pub untouched: String,
}

fn overrides(pairs: &[(&str, &str)]) -> Overrides {
    pairs
        .iter()
        .map(|(path, literal)| ((*path).to_owned(), (*literal).to_owned()))
        .collect()
}

#[rstest]
fn declared_literals_are_applied() -> Result<()> {
    let mut cfg = Defaults {
        untouched: "kept".to_owned(),
        ..Defaults::default()
    };
    envcfg::default(&mut cfg, &Overrides::new())?;
    ensure!(cfg.s == "foo", "unexpected s: {}", cfg.s);
    ensure!(cfg.n == 42, "unexpected n: {}", cfg.n);
    ensure!(cfg.b, "b should be true");
    ensure!(cfg.d == Duration::from_secs(60), "unexpected d: {:?}", cfg.d);
    ensure!(
        cfg.f.to_bits() == 36.6_f64.to_bits(),
        "unexpected f: {}",
        cfg.f
    );
    ensure!(cfg.list == [1, 2, 3, 4], "unexpected list: {:?}", cfg.list);
    ensure!(cfg.untouched == "kept", "field without default was changed");
    Ok(())
}

#[rstest]
fn overrides_replace_declared_literals() -> Result<()> {
    let mut cfg = Defaults::default();
    envcfg::default(&mut cfg, &overrides(&[("n", "7"), ("s", "bar")]))?;
    ensure!(cfg.n == 7, "override not applied: {}", cfg.n);
    ensure!(cfg.s == "bar", "override not applied: {}", cfg.s);
    ensure!(cfg.b, "declared default should still apply");
    Ok(())
}

#[rstest]
fn overrides_for_unknown_paths_are_ignored() -> Result<()> {
    let mut cfg = Defaults::default();
    envcfg::default(&mut cfg, &overrides(&[("missing", "1")]))?;
    ensure!(cfg.n == 42, "declared default should apply: {}", cfg.n);
    Ok(())
}

#[rstest]
fn overrides_reach_fields_without_declared_default() -> Result<()> {
    let mut cfg = Defaults::default();
    envcfg::default(&mut cfg, &overrides(&[("untouched", "x")]))?;
    ensure!(cfg.untouched == "x", "override not applied: {}", cfg.untouched);
    Ok(())
}

#[rstest]
#[case::integer("n", "forty-two")]
#[case::boolean("b", "yes")]
#[case::duration("d", "1 minute")]
#[case::list_element("list", "1,x,3")]
fn malformed_overrides_fail_with_parse_error(
    #[case] path: &str,
    #[case] literal: &str,
) -> Result<()> {
    let mut cfg = Defaults::default();
    let err = envcfg::default(&mut cfg, &overrides(&[(path, literal)]))
        .err()
        .ok_or_else(|| anyhow!("expected {literal:?} to be rejected for {path}"))?;
    ensure!(
        matches!(&err, EnvCfgError::Parse { path: failed, .. } if failed == path),
        "unexpected error: {err}"
    );
    Ok(())
}

#[rstest]
fn list_failure_leaves_prior_value() -> Result<()> {
    let mut cfg = Defaults {
        list: vec![9],
        ..Defaults::default()
    };
    let err = envcfg::default(&mut cfg, &overrides(&[("list", "1,x,3")]))
        .err()
        .ok_or_else(|| anyhow!("expected malformed list to fail"))?;
    let EnvCfgError::Parse { source, .. } = err else {
        return Err(anyhow!("expected a parse error"));
    };
    ensure!(
        matches!(source, ParseError::Element { index: 1, .. }),
        "unexpected source: {source}"
    );
    ensure!(cfg.list == [9], "list was modified: {:?}", cfg.list);
    Ok(())
}
