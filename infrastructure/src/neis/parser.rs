//! NEIS meal XML parser
//!
//! A successful answer looks like:
//!
//! ```xml
//! <mealServiceDietInfo>
//!   <head>
//!     <list_total_count>2</list_total_count>
//!     <RESULT><CODE>INFO-000</CODE><MESSAGE>정상 처리되었습니다.</MESSAGE></RESULT>
//!   </head>
//!   <row>
//!     <MMEAL_SC_NM><![CDATA[중식]]></MMEAL_SC_NM>
//!     <DDISH_NM><![CDATA[쌀밥<br/>미역국 5.6.]]></DDISH_NM>
//!   </row>
//! </mealServiceDietInfo>
//! ```
//!
//! Errors (including "no data for this date") come back as a bare
//! `<RESULT>` with a code other than `INFO-000`.

use meal_application::MealDocumentParser;
use meal_domain::{MealRecord, MealRecordBuilder};
use roxmltree::{Document, Node};
use tracing::{debug, warn};

const RESULT_TAG: &str = "RESULT";
const CODE_TAG: &str = "CODE";
const ROW_TAG: &str = "row";
const MEAL_TYPE_TAG: &str = "MMEAL_SC_NM";
const DISH_TAG: &str = "DDISH_NM";

/// Status code the service uses for a normal answer
pub const SUCCESS_CODE: &str = "INFO-000";

/// Separator between dishes inside one `DDISH_NM` field
pub const DISH_SEPARATOR: &str = "<br/>";

/// Parses NEIS `mealServiceDietInfo` XML
///
/// Fail-soft: anything short of a readable document with rows yields `None`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeisXmlParser;

impl NeisXmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl MealDocumentParser for NeisXmlParser {
    fn parse(&self, document: &str, date: &str) -> Option<MealRecord> {
        let doc = match Document::parse(document) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Unreadable meal document for {}: {}", date, e);
                return None;
            }
        };

        if let Some(code) = result_code(&doc).filter(|c| !c.is_empty() && c != SUCCESS_CODE) {
            debug!("Meal service answered {} for {}", code, date);
            return None;
        }

        let rows: Vec<Node> = doc
            .descendants()
            .filter(|n| n.has_tag_name(ROW_TAG))
            .collect();
        if rows.is_empty() {
            debug!("No meal rows for {}", date);
            return None;
        }

        let mut builder = MealRecordBuilder::new(date);
        for (i, row) in rows.iter().enumerate() {
            let (Some(meal_type), Some(dishes)) =
                (field_text(row, MEAL_TYPE_TAG), field_text(row, DISH_TAG))
            else {
                debug!("Skipping row {} without meal type or dishes", i);
                continue;
            };

            builder.append(&meal_type, split_dishes(&dishes));
        }

        Some(builder.build())
    }
}

/// Code of the first `RESULT` element, if the document has one
fn result_code(doc: &Document) -> Option<String> {
    let result = doc.descendants().find(|n| n.has_tag_name(RESULT_TAG))?;
    field_text(&result, CODE_TAG)
}

/// Text content of the first descendant named `tag`
fn field_text(node: &Node, tag: &str) -> Option<String> {
    node.descendants()
        .find(|n| n.has_tag_name(tag))
        .map(|n| text_content(&n))
}

/// All descendant text joined, CDATA included
fn text_content(node: &Node) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

/// Split a `DDISH_NM` value into dishes, dropping blank segments
///
/// Segments are kept raw; allergen codes are stripped at display time.
fn split_dishes(field: &str) -> Vec<&str> {
    field
        .split(DISH_SEPARATOR)
        .filter(|s| !s.trim().is_empty())
        .collect()
}
