//! Tests for the environment documentation listing.

use anyhow::{Result, anyhow, ensure};
use envcfg::{EnvCfg, EnvVarDoc, ReadOptions};
use rstest::rstest;

#[derive(Debug, Default, EnvCfg)]
struct Inner {
    pub foo: String,
}

#[derive(Debug, Default, EnvCfg)]
#[envcfg(prefix = "APP_")]
struct Documented {
    #[envcfg(default = "8080")]
    pub port: u16,
    #[envcfg(key = "-")]
    pub internal: String,
    #[envcfg(nested)]
    pub inner: Inner,
}

fn find<'a>(docs: &'a [EnvVarDoc], path: &str) -> Result<&'a EnvVarDoc> {
    docs.iter()
        .find(|doc| doc.path == path)
        .ok_or_else(|| anyhow!("no entry for {path}"))
}

#[rstest]
fn lists_keys_for_every_bindable_field() -> Result<()> {
    let docs = envcfg::describe::<Documented>(&ReadOptions::new());
    let paths: Vec<&str> = docs.iter().map(|doc| doc.path.as_str()).collect();
    ensure!(
        paths == ["port", "internal", "inner.foo"],
        "unexpected paths: {paths:?}"
    );

    let port = find(&docs, "port")?;
    ensure!(port.key.as_deref() == Some("APP_PORT"), "port key: {:?}", port.key);
    ensure!(port.fallback_key.as_deref() == Some("PORT"), "port fallback");
    ensure!(port.default.as_deref() == Some("8080"), "port default");
    ensure!(port.type_name == "u16", "port type: {}", port.type_name);

    let internal = find(&docs, "internal")?;
    ensure!(internal.key.is_none(), "skipped field has a key");

    let inner = find(&docs, "inner.foo")?;
    ensure!(
        inner.key.as_deref() == Some("APP_INNER__FOO"),
        "nested key: {:?}",
        inner.key
    );
    Ok(())
}

#[rstest]
fn overrides_show_in_defaults() -> Result<()> {
    let options = ReadOptions::new()
        .prefix("")
        .with_default_overrides([("port", "9090")]);
    let docs = envcfg::describe::<Documented>(&options);
    let port = find(&docs, "port")?;
    ensure!(port.default.as_deref() == Some("9090"), "override not listed");
    ensure!(port.key.as_deref() == Some("PORT"), "empty prefix not honoured");
    ensure!(port.fallback_key.is_none(), "fallback listed without a prefix");
    Ok(())
}
