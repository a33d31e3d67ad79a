//! Catalog inspection commands.

use crate::render;
use chd_core::Catalog;
use std::io::Write;

pub fn list_cases<W: Write>(catalog: &Catalog, json: bool, out: &mut W) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(catalog.cases())?)?;
    } else {
        write!(out, "{}", render::case_list(catalog))?;
    }
    Ok(())
}

pub fn resolve<W: Write>(catalog: &Catalog, text: &str, json: bool, out: &mut W) -> anyhow::Result<()> {
    let resolution = catalog.resolve(text);
    if json {
        writeln!(out, "{}", serde_json::to_string(&resolution)?)?;
    } else {
        writeln!(out, "{}", render::resolution(&resolution, catalog))?;
    }
    Ok(())
}
