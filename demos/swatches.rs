// Write swatches.html showing the reference table, the naming of a
// sweep through the RGB cube and the description of a few palettes.
// Set RUST_LOG=trace to see each classification.

use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use log::info;
use rgb::{RGB, RGB8};
use chroma_names::{ColorTable, ExtractedColors, StyleGroups};

type Err = Box<dyn Error>;

fn css_string(c: RGB<f64>) -> String {
    let c = RGB8 { r: (255. * c.r).round() as u8, g: (255. * c.g).round() as u8,
                   b: (255. * c.b).round() as u8 };
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

fn swatch(fh: &mut impl Write, c: RGB<f64>, label: &str) -> Result<(), Err> {
    writeln!(fh, "  <td style=\"width: 90px; height: 40px; \
                  background-color: {}\"></td><td>{label}</td>",
             css_string(c))?;
    Ok(())
}

fn reference_table(fh: &mut impl Write, table: &ColorTable)
                   -> Result<(), Err> {
    writeln!(fh, "<table style=\"border-spacing: 4px\">")?;
    for row in table.entries().chunks(6) {
        writeln!(fh, "<tr>")?;
        for e in row {
            swatch(fh, e.rgb(), e.name())?;
        }
        writeln!(fh, "</tr>")?;
    }
    writeln!(fh, "</table>")?;
    Ok(())
}

/// Name `n` colors going from `c0` to `c1` in a straight line.
fn sweep(fh: &mut impl Write, table: &ColorTable, c0: RGB<f64>, c1: RGB<f64>,
         n: usize) -> Result<(), Err> {
    let dt = 1. / (n - 1) as f64;
    writeln!(fh, "<table style=\"border-spacing: 4px\"><tr>")?;
    for i in 0 .. n {
        let t = i as f64 * dt;
        let c = RGB { r: c0.r + t * (c1.r - c0.r), g: c0.g + t * (c1.g - c0.g),
                      b: c0.b + t * (c1.b - c0.b) };
        swatch(fh, c, table.classify(&c))?;
    }
    writeln!(fh, "</tr></table>")?;
    Ok(())
}

fn palette(fh: &mut impl Write, colors: [[u8; 3]; 4]) -> Result<(), Err> {
    let [bg, p, s, d] = colors.map(|[r, g, b]| Some(RGB8::new(r, g, b)));
    let extracted = ExtractedColors::new(bg, p, s, d);
    let description = extracted.describe(ColorTable::standard(),
                                         StyleGroups::standard());
    info!("{}", description.to_string().replace('\n', "; "));
    writeln!(fh, "<table style=\"border-spacing: 4px\"><tr>")?;
    for [r, g, b] in colors {
        let c = RGB8::new(r, g, b);
        swatch(fh, RGB { r: c.r as f64 / 255., g: c.g as f64 / 255.,
                         b: c.b as f64 / 255. },
               chroma_names::classify(&c))?;
    }
    writeln!(fh, "</tr></table>\n<pre>{description}</pre>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    env_logger::init();
    let table = ColorTable::standard();
    let mut fh = BufWriter::new(File::create("swatches.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>Chroma_names: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Reference colors ({} entries, {} names)</h3>",
             table.len(), table.names().len())?;
    reference_table(&mut fh, table)?;

    writeln!(fh, "<h3>Sweeps</h3>")?;
    let black = RGB { r: 0., g: 0., b: 0. };
    let white = RGB { r: 1., g: 1., b: 1. };
    sweep(&mut fh, table, black, white, 9)?;
    sweep(&mut fh, table, RGB { r: 1., g: 0., b: 0. },
          RGB { r: 0., g: 0., b: 1. }, 9)?;
    sweep(&mut fh, table, RGB { r: 1., g: 1., b: 0. },
          RGB { r: 0., g: 0.5, b: 0.5 }, 9)?;

    writeln!(fh, "<h3>Palettes</h3>")?;
    palette(&mut fh, [[250, 248, 240], [0, 33, 97], [114, 47, 55],
                      [160, 82, 45]])?;
    palette(&mut fh, [[194, 178, 128], [64, 224, 208], [255, 127, 80],
                      [255, 255, 255]])?;
    palette(&mut fh, [[10, 10, 10], [140, 0, 0], [77, 25, 102],
                      [255, 105, 180]])?;

    writeln!(fh, "</body>\n\
                  </html>")?;
    info!("wrote swatches.html");
    Ok(())
}
