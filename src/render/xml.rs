//! XML projection of generated records
//!
//! Renders each category sub-sequence as a document with one `Record`
//! element per entry, carrying `Date` (ISO `YYYY-MM-DD`) and `Value`
//! (decimal text) children. Lossless and order-preserving; no schema beyond
//! well-formedness.

use crate::domain::record::Record;

const CONCURRENT_ROOT: &str = "ConcurrentRecords";
const DENIAL_ROOT: &str = "DenialRecords";

pub fn concurrent_records_xml<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records_xml(CONCURRENT_ROOT, records)
}

pub fn denial_records_xml<'a>(records: impl IntoIterator<Item = &'a Record>) -> String {
    records_xml(DENIAL_ROOT, records)
}

fn records_xml<'a>(root: &str, records: impl IntoIterator<Item = &'a Record>) -> String {
    let mut xml = String::new();
    xml.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    xml.push_str(&format!("<{root}>\n"));
    for record in records {
        xml.push_str("  <Record>\n");
        xml.push_str(&format!(
            "    <Date>{}</Date>\n",
            record.date.format("%Y-%m-%d")
        ));
        xml.push_str(&format!("    <Value>{}</Value>\n", record.value));
        xml.push_str("  </Record>\n");
    }
    xml.push_str(&format!("</{root}>\n"));
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record::Record;
    use crate::domain::test_data::dates;

    #[test]
    fn renders_concurrent_document() {
        let records = [
            Record::concurrent(dates::jan_1(), 20),
            Record::concurrent(dates::jan_10(), 40),
        ];
        let xml = concurrent_records_xml(&records);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(xml.contains("<ConcurrentRecords>"));
        assert!(xml.contains("<Date>2024-01-01</Date>"));
        assert!(xml.contains("<Value>20</Value>"));
        assert!(xml.contains("<Date>2024-01-10</Date>"));
        assert!(xml.ends_with("</ConcurrentRecords>\n"));
    }

    #[test]
    fn renders_denial_document() {
        let records = [Record::denial(dates::jan_1(), 120)];
        let xml = denial_records_xml(&records);

        assert!(xml.contains("<DenialRecords>"));
        assert!(xml.contains("<Value>120</Value>"));
        assert!(xml.ends_with("</DenialRecords>\n"));
    }

    #[test]
    fn empty_sequence_renders_empty_document() {
        let xml = denial_records_xml([]);

        assert!(xml.contains("<DenialRecords>"));
        assert!(!xml.contains("<Record>"));
    }

    #[test]
    fn preserves_record_order() {
        let records = [
            Record::concurrent(dates::jan_1(), 20),
            Record::concurrent(dates::jan_10(), 40),
        ];
        let xml = concurrent_records_xml(&records);

        let first = xml.find("2024-01-01").unwrap();
        let second = xml.find("2024-01-10").unwrap();
        assert!(first < second);
    }
}
