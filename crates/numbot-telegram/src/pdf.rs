//! Printable vedic forecast.
//!
//! Built-in PDF fonts only cover Latin-1, so every line here is plain ASCII.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use numbot_core::{errors::Error, Result, VedicForecast};

use crate::templates;

const PAGE_W: f32 = 297.0;
const PAGE_H: f32 = 210.0;
const MARGIN: f32 = 20.0;
const LINE: f32 = 9.0;

pub fn file_name(year: u32) -> String {
    format!("Forecast {year}.pdf")
}

/// Render the forecast as a single landscape A4 page.
pub fn vedic_report(f: &VedicForecast) -> Result<Vec<u8>> {
    let title = format!("Vedic forecast for {}", f.year);
    let (doc, page, layer) = PdfDocument::new(&title, Mm(PAGE_W), Mm(PAGE_H), "Layer 1");
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(pdf_err)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(pdf_err)?;

    let mut pen = Pen {
        layer: doc.get_page(page).get_layer(layer),
        y: PAGE_H - MARGIN,
    };

    pen.line(&title, 24.0, &bold);
    pen.gap();
    pen.line(&format!("Birthday: {:02}.{:02}", f.day, f.month), 14.0, &regular);
    pen.line(
        &format!("Last two digits of the year: {:02}", f.year_last_two),
        14.0,
        &regular,
    );
    pen.line(
        &format!(
            "Weekday in {}: {} (planet number {})",
            f.year,
            templates::weekday_name(f.weekday),
            f.planet_number
        ),
        14.0,
        &regular,
    );
    pen.gap();
    pen.line(
        &format!(
            "{} + {} + {} + {} = {}",
            f.day, f.month, f.year_last_two, f.planet_number, f.sum_raw
        ),
        14.0,
        &regular,
    );
    pen.line(&format!("Reduction: {}", chain(f)), 14.0, &regular);
    pen.gap();
    pen.line(&format!("Forecast number: {}", f.reduced), 18.0, &bold);
    pen.line(templates::meaning(f.reduced).unwrap_or_default(), 14.0, &regular);

    doc.save_to_bytes().map_err(pdf_err)
}

struct Pen {
    layer: PdfLayerReference,
    y: f32,
}

impl Pen {
    fn line(&mut self, text: &str, size: f32, font: &IndirectFontRef) {
        self.layer
            .use_text(text, size, Mm(MARGIN), Mm(self.y), font);
        self.y -= LINE * size / 14.0;
    }

    fn gap(&mut self) {
        self.y -= LINE / 2.0;
    }
}

fn chain(f: &VedicForecast) -> String {
    f.reduction_chain()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn pdf_err(e: printpdf::Error) -> Error {
    Error::External(format!("pdf error: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_a_pdf() {
        let f = VedicForecast::parse("12.05.2021").unwrap();
        let bytes = vedic_report(&f).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn file_name_carries_the_year() {
        assert_eq!(file_name(2021), "Forecast 2021.pdf");
    }

    #[test]
    fn chain_is_ascii() {
        let f = VedicForecast::for_year(31, 12, 2099).unwrap();
        assert_eq!(chain(&f), "145 -> 10 -> 1");
    }
}
