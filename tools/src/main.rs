// To use this script, edit colors.hjson in this directory and run it
// from tools/.  It rewrites ../src/names.rs.

use std::{string::String,
          collections::BTreeSet,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::Value::{self, *};

#[derive(Debug)]
struct Entry {
    name: String,
    rgb: [f64; 3], // in [0, 1]
}

#[derive(Debug)]
struct Style {
    label: String,
    colors: Vec<String>,
}

fn number(v: &Value) -> f64 {
    match v {
        F64(x) => *x,
        I64(i) => *i as f64,
        U64(u) => *u as f64,
        _ => panic!("chroma-names-tools: {v:?} is not a number"),
    }
}

fn string(v: &Value) -> String {
    match v {
        String(s) => s.clone(),
        _ => panic!("chroma-names-tools: {v:?} is not a string"),
    }
}

/// The array stored under `key` in the object `v`.
fn array<'a>(v: &'a Value, key: &str) -> &'a Vec<Value> {
    match v {
        Object(m) => match m.get(key) {
            Some(Array(a)) => a,
            _ => panic!("chroma-names-tools: “{key}” must be an array"),
        },
        _ => panic!("chroma-names-tools: {v:?} is not an object"),
    }
}

/// Says whether `x` is written with at most two decimals, so that
/// `{:.2}` reproduces it exactly.
fn two_decimals(x: f64) -> bool {
    (100. * x).round() / 100. == x
}

/// Convert `["Red", 0.9, 0.1, 0.1]` to an [`Entry`].
fn entry(v: &Value) -> Entry {
    match v {
        Array(a) if a.len() == 4 => {
            let name = string(&a[0]);
            let rgb = [number(&a[1]), number(&a[2]), number(&a[3])];
            if rgb.iter().any(|x| !(0. ..= 1.).contains(x)) {
                panic!("chroma-names-tools: “{name}” {rgb:?} not in [0, 1]")
            }
            if !rgb.iter().all(|&x| two_decimals(x)) {
                panic!("chroma-names-tools: “{name}” {rgb:?} has more than \
                        two decimals")
            }
            Entry { name, rgb }
        }
        _ => panic!("chroma-names-tools: {v:?} is not [name, r, g, b]"),
    }
}

fn style(v: &Value) -> Style {
    match v {
        Object(m) => {
            let label = match m.get("label") {
                Some(l) => string(l),
                None => panic!("chroma-names-tools: style without label"),
            };
            let colors = array(v, "colors").iter().map(string).collect();
            Style { label, colors }
        }
        _ => panic!("chroma-names-tools: {v:?} is not a style"),
    }
}

fn read_data(json: &Value) -> (Vec<Entry>, Vec<Style>) {
    let entries: Vec<Entry> = array(json, "colors").iter().map(entry).collect();
    let styles: Vec<Style> = array(json, "styles").iter().map(style).collect();
    if entries.is_empty() {
        panic!("chroma-names-tools: no colors")
    }
    let names: BTreeSet<&str> = entries.iter().map(|e| e.name.as_str())
        .collect();
    let mut labels = BTreeSet::new();
    for s in &styles {
        if !labels.insert(s.label.as_str()) {
            panic!("chroma-names-tools: style “{}” defined twice", s.label)
        }
        for c in &s.colors {
            if !names.contains(c.as_str()) {
                panic!("chroma-names-tools: style “{}” uses the unknown \
                        color “{c}”", s.label)
            }
        }
    }
    (entries, styles)
}

fn quoted(names: &[String]) -> String {
    names.iter().map(|n| format!("{n:?}")).collect::<Vec<_>>().join(", ")
}

fn main() -> Result<(), Box<dyn Error>> {
    let fh_data = File::open("colors.hjson")?;
    let data: Value = serde_hjson::from_reader(fh_data)?;
    let (entries, styles) = read_data(&data);

    let mut fh = BufWriter::new(File::create("../src/names.rs")?);
    writeln!(fh, "// Written by chroma-names-tools\n\n\
                  use lazy_static::lazy_static;\n\
                  pub(crate) mod ty;\n\
                  use ty::*;\n")?;

    let mut names: Vec<&str> = vec![];
    for e in &entries {
        if !names.contains(&e.name.as_str()) { names.push(&e.name) }
    }
    writeln!(fh, "// Reference colors: {} entries, {} names",
             entries.len(), names.len())?;
    writeln!(fh, "lazy_static! {{\n  \
                  pub(crate) static ref COLORS: Vec<ColorEntry> = vec![")?;
    for Entry { name, rgb: [r, g, b] } in &entries {
        writeln!(fh, "    ColorEntry::new({name:?}, {r:.2}, {g:.2}, {b:.2}),")?;
    }
    writeln!(fh, "  ];\n}}\n")?;

    writeln!(fh, "// Style groups: {}", styles.len())?;
    writeln!(fh, "lazy_static! {{\n  \
                  pub(crate) static ref STYLES: Vec<StyleGroup> = vec![")?;
    for Style { label, colors } in &styles {
        writeln!(fh, "    StyleGroup::new({label:?}, [{}]),", quoted(colors))?;
    }
    writeln!(fh, "  ];\n}}")?;

    Ok(())
}
