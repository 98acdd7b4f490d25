//! Edition records for terminal procedures and chart supplements
//!
//! The APRA `*/chart` endpoints answer with a `productSet` document:
//!
//! ```xml
//! <productSet>
//!   <status code="200" message="OK"/>
//!   <edition geoname="US" editionName="CURRENT" format="PDF">
//!     <editionDate>09/04/2025</editionDate>
//!     <product productName="TPP" url="https://aeronav.faa.gov/upload_313-d/terminal/DDTPPA_250904.zip"/>
//!   </edition>
//! </productSet>
//! ```
//!
//! Some products carry `editionDate` as an attribute of `<edition>` instead
//! of a child element. Decoding turns either form into an [`EditionRecord`];
//! the download URLs are then derived from the record by pure functions.

use aviation_common::{AviationError, AviationResult};
use chrono::NaiveDate;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::Serialize;
use url::Url;

const API: &str = "Charts";

/// Edition date and product location extracted from a `productSet`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditionRecord {
    pub edition_date: NaiveDate,
    pub product_url: Url,
    /// The `upload_*` path segment of the product URL
    pub upload_id: String,
}

/// A derived download link for one terminal procedures region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionUrl {
    pub region: String,
    pub url: String,
}

#[derive(Default)]
struct RawEdition {
    date: Option<String>,
    product_url: Option<String>,
}

/// Decode a `productSet` document into an [`EditionRecord`]
pub fn decode_edition(xml: &str) -> AviationResult<EditionRecord> {
    let raw = scan(xml)?;

    let date = raw
        .date
        .ok_or_else(|| AviationError::unexpected(API, "no editionDate in response"))?;
    let product_url = raw
        .product_url
        .ok_or_else(|| AviationError::unexpected(API, "no product url in response"))?;

    let edition_date = NaiveDate::parse_from_str(date.trim(), "%m/%d/%Y").map_err(|e| {
        AviationError::unexpected(API, format!("bad editionDate '{}': {}", date.trim(), e))
    })?;
    let product_url = Url::parse(product_url.trim())?;
    let upload_id = upload_segment(&product_url).ok_or_else(|| {
        AviationError::unexpected(API, format!("no upload id in {}", product_url))
    })?;

    Ok(EditionRecord {
        edition_date,
        product_url,
        upload_id,
    })
}

fn scan(xml: &str) -> AviationResult<RawEdition> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut raw = RawEdition::default();
    let mut in_edition_date = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) | Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                b"edition" => {
                    if raw.date.is_none() {
                        raw.date = attribute(e, b"editionDate");
                    }
                }
                b"editionDate" => in_edition_date = true,
                b"product" => {
                    if raw.product_url.is_none() {
                        raw.product_url = attribute(e, b"url");
                    }
                }
                _ => {}
            },
            Ok(Event::Text(ref t)) if in_edition_date => {
                if raw.date.is_none() {
                    let text = t.unescape().map_err(|e| AviationError::unexpected(API, e.to_string()))?;
                    raw.date = Some(text.into_owned());
                }
            }
            Ok(Event::End(ref e)) if e.local_name().as_ref() == b"editionDate" => {
                in_edition_date = false;
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AviationError::unexpected(
                    API,
                    format!("malformed XML at {}: {}", reader.buffer_position(), e),
                ))
            }
            _ => {}
        }
    }

    Ok(raw)
}

fn attribute(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.local_name().as_ref() == name)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
        .filter(|v| !v.trim().is_empty())
}

fn upload_segment(url: &Url) -> Option<String> {
    url.path_segments()?
        .find(|segment| segment.starts_with("upload_"))
        .map(str::to_string)
}

fn origin(record: &EditionRecord) -> String {
    record.product_url.origin().ascii_serialization()
}

/// `YYYY-MM-DD`, as shown to callers and used in terminal paths
pub fn iso_date(record: &EditionRecord) -> String {
    record.edition_date.format("%Y-%m-%d").to_string()
}

/// `{origin}/{upload_id}/terminal/{YYYY-MM-DD}/{REGION}.pdf` per region
pub fn tpp_region_urls(record: &EditionRecord, regions: &[&str]) -> Vec<RegionUrl> {
    let base = format!(
        "{}/{}/terminal/{}",
        origin(record),
        record.upload_id,
        iso_date(record)
    );
    regions
        .iter()
        .map(|region| RegionUrl {
            region: region.to_string(),
            url: format!("{base}/{region}.pdf"),
        })
        .collect()
}

/// `{origin}/{upload_id}/supplements/CS_{REGION}_{YYYYMMDD}.pdf`
pub fn supplement_url(record: &EditionRecord, region: &str) -> String {
    format!(
        "{}/{}/supplements/CS_{}_{}.pdf",
        origin(record),
        record.upload_id,
        region,
        record.edition_date.format("%Y%m%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHILD_DATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<productSet>
  <status code="200" message="OK"/>
  <edition geoname="US" editionName="CURRENT" format="PDF">
    <editionDate>09/04/2025</editionDate>
    <editionNumber>2509</editionNumber>
    <product productName="TPP" url="https://aeronav.faa.gov/upload_313-d/terminal/DDTPPA_250904.zip"/>
  </edition>
</productSet>"#;

    const ATTRIBUTE_DATE: &str = r#"<productSet>
  <edition editionName="CURRENT" editionDate="10/30/2025">
    <product productName="CHART SUPPLEMENT" url="https://aeronav.faa.gov/upload_100-a/supplements/DCS_20251030.zip"></product>
  </edition>
</productSet>"#;

    #[test]
    fn test_decode_child_element_date() {
        let record = decode_edition(CHILD_DATE).unwrap();
        assert_eq!(record.edition_date, NaiveDate::from_ymd_opt(2025, 9, 4).unwrap());
        assert_eq!(record.upload_id, "upload_313-d");
        assert_eq!(iso_date(&record), "2025-09-04");
    }

    #[test]
    fn test_decode_attribute_date() {
        let record = decode_edition(ATTRIBUTE_DATE).unwrap();
        assert_eq!(record.edition_date, NaiveDate::from_ymd_opt(2025, 10, 30).unwrap());
        assert_eq!(record.upload_id, "upload_100-a");
    }

    #[test]
    fn test_decode_missing_product() {
        let err = decode_edition("<productSet><edition editionDate=\"01/02/2025\"/></productSet>")
            .unwrap_err();
        assert!(err.to_string().contains("no product url"));
    }

    #[test]
    fn test_decode_bad_date() {
        let xml = r#"<productSet><edition editionDate="2025-01-02"><product url="https://aeronav.faa.gov/upload_1/x.zip"/></edition></productSet>"#;
        let err = decode_edition(xml).unwrap_err();
        assert!(err.to_string().contains("bad editionDate"));
    }

    #[test]
    fn test_decode_without_upload_segment() {
        let xml = r#"<productSet><edition editionDate="01/02/2025"><product url="https://aeronav.faa.gov/files/x.zip"/></edition></productSet>"#;
        assert!(decode_edition(xml).is_err());
    }

    #[test]
    fn test_tpp_region_urls() {
        let record = decode_edition(CHILD_DATE).unwrap();
        let urls = tpp_region_urls(&record, &["NE3"]);
        assert_eq!(
            urls,
            vec![RegionUrl {
                region: "NE3".to_string(),
                url: "https://aeronav.faa.gov/upload_313-d/terminal/2025-09-04/NE3.pdf".to_string(),
            }]
        );
    }

    #[test]
    fn test_supplement_url() {
        let record = decode_edition(ATTRIBUTE_DATE).unwrap();
        assert_eq!(
            supplement_url(&record, "NE"),
            "https://aeronav.faa.gov/upload_100-a/supplements/CS_NE_20251030.pdf"
        );
    }
}
