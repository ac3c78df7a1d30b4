//! Event-reader parsing of ENTSO-E market documents.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use gridpulse_core::records::TimeSeriesPoint;

use crate::error::EntsoeError;

/// Parse a market document into time-series points, ordered ascending.
///
/// Each `<Point>` carries a 1-based `position` within its `<Period>`; the
/// point's timestamp is the period's interval start plus
/// `(position - 1) * resolution`. An `Acknowledgement_MarketDocument`
/// (the platform's "no matching data" response) parses to an empty vec.
///
/// # Errors
///
/// Returns [`EntsoeError::Xml`] if the body is not well-formed XML.
pub fn parse_market_document(xml: &str, unit: &str) -> Result<Vec<TimeSeriesPoint>, EntsoeError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut points: Vec<TimeSeriesPoint> = Vec::new();
    let mut current_tag = String::new();
    let mut in_interval = false;
    let mut period_start: Option<DateTime<Utc>> = None;
    let mut resolution_minutes: i64 = 60;
    let mut position: Option<i64> = None;
    let mut quantity: Option<f64> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = local_name(e.name().as_ref());
                match name.as_str() {
                    "Acknowledgement_MarketDocument" => return Ok(Vec::new()),
                    "timeInterval" => in_interval = true,
                    "Point" => {
                        position = None;
                        quantity = None;
                    }
                    _ => {}
                }
                current_tag = name;
            }
            Ok(Event::End(e)) => {
                let name = local_name(e.name().as_ref());
                match name.as_str() {
                    "timeInterval" => in_interval = false,
                    "Point" => {
                        if let (Some(start), Some(pos), Some(qty)) =
                            (period_start, position, quantity)
                        {
                            points.push(TimeSeriesPoint {
                                timestamp: start
                                    + Duration::minutes((pos - 1) * resolution_minutes),
                                value: qty,
                                unit: unit.to_string(),
                            });
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.unescape().unwrap_or_default().into_owned();
                match current_tag.as_str() {
                    "start" if in_interval => period_start = parse_interval_start(&text),
                    "resolution" => {
                        if let Some(minutes) = parse_resolution_minutes(&text) {
                            resolution_minutes = minutes;
                        }
                    }
                    "position" => position = text.trim().parse().ok(),
                    "quantity" => quantity = text.trim().parse().ok(),
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(EntsoeError::Xml {
                    context: "market document".to_string(),
                    source: e,
                })
            }
            _ => {}
        }
    }

    points.sort_by_key(|p| p.timestamp);
    Ok(points)
}

fn local_name(qname: &[u8]) -> String {
    let raw = std::str::from_utf8(qname).unwrap_or("");
    raw.rsplit(':').next().unwrap_or(raw).to_string()
}

/// Interval starts come as `2024-06-01T00:00Z`, occasionally with seconds.
fn parse_interval_start(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%MZ")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%SZ"))
        .ok()?;
    Some(naive.and_utc())
}

/// `PT60M` / `PT15M` style durations. Anything else keeps the previous value.
fn parse_resolution_minutes(s: &str) -> Option<i64> {
    let s = s.trim();
    s.strip_prefix("PT")?.strip_suffix('M')?.parse().ok()
}
