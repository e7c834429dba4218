use crate::bank::Bank;
use crate::detail::{DecodedDetail, DetailRecord};
use crate::error::ProcessError;
use crate::fields::{FieldMap, FieldSource};

use std::io::{Read, Write};
use std::iter::Iterator;

use csv::{ReaderBuilder, Trim, WriterBuilder};

/// Reads the layout engine's output: one header row of field names, then one
/// row per detail record. A column present in the header is a field defined
/// by the layout, even when a row leaves it empty.
///
/// Cells are not trimmed since packed fields depend on their exact columns.
#[inline]
pub fn read_csv_stream(reader: impl Read) -> impl Iterator<Item = FieldMap> {
    ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(reader)
        .into_deserialize()
        .inspect(|result: &Result<FieldMap, csv::Error>| {
            if let Err(e) = result {
                tracing::warn!("Error parsing detail record: {}", e);
            }
        })
        .filter_map(Result::ok)
}

/// Decodes every record, skipping those with malformed dates.
#[inline]
pub fn decode_stream<S: FieldSource>(
    bank: Bank,
    stream: impl Iterator<Item = S>,
) -> impl Iterator<Item = DecodedDetail> {
    stream.filter_map(move |source| {
        let detail = DetailRecord::new(bank, source);
        detail
            .decode()
            .inspect_err(|e| {
                tracing::warn!(
                    "Skipping detail record {}: {}",
                    detail.sequence_number(),
                    e
                );
            })
            .ok()
    })
}

/// Decodes every record, stopping at the first malformed one.
#[inline]
pub fn decode_all<S: FieldSource>(
    bank: Bank,
    stream: impl Iterator<Item = S>,
) -> Result<Vec<DecodedDetail>, ProcessError> {
    stream
        .map(|source| {
            DetailRecord::new(bank, source)
                .decode()
                .map_err(ProcessError::from)
        })
        .collect()
}

/// Writes decoded details as CSV with a header row. Returns the number of
/// records written.
pub fn write_report(
    writer: impl Write,
    details: impl Iterator<Item = DecodedDetail>,
) -> Result<usize, ProcessError> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);

    let mut count = 0;
    for detail in details {
        writer.serialize(&detail)?;
        count += 1;
    }
    writer.flush()?;

    tracing::debug!("Wrote {} decoded detail records", count);
    Ok(count)
}

#[inline]
pub fn process_csv_stream(
    bank: Bank,
    reader: impl Read,
    writer: impl Write,
    strict: bool,
) -> Result<usize, ProcessError> {
    let stream = read_csv_stream(reader);

    if strict {
        let details = decode_all(bank, stream)?;
        write_report(writer, details.into_iter())
    } else {
        write_report(writer, decode_stream(bank, stream))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;
    use crate::fields::Field;
    use rust_decimal::dec;

    const ITAU_FIELDS: &str = "\
numero_sequencial,codigo_de_ocorrencia,valor_principal,data_credito,codigo_liquidacao,erros
2,06,150.00,160324,BL,
3,03,0.00,0,,  0004
4,09,10.00,310424,,
";

    #[test]
    fn test_read_csv_stream() {
        let records: Vec<FieldMap> = read_csv_stream(ITAU_FIELDS.as_bytes()).collect();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].field("codigo_de_ocorrencia"), Some("06"));
        assert_eq!(records[1].field("erros"), Some("  0004"));
        assert!(records[2].has_field(Field::LiquidationCode.name()));
        assert!(!records[2].has_field(Field::DdaFlag.name()));
    }

    #[test]
    fn test_decode_stream_skips_malformed_dates() {
        let details: Vec<DecodedDetail> =
            decode_stream(Bank::Itau, read_csv_stream(ITAU_FIELDS.as_bytes())).collect();

        assert_eq!(details.len(), 2);
        assert_eq!(details[0].sequence_number, 2);
        assert_eq!(details[0].received_value, dec!(150.00));
        assert_eq!(details[0].liquidation_description.as_deref(), Some("ITAÚ BANKLINE"));
        assert_eq!(details[1].sequence_number, 3);
        assert_eq!(details[1].liquidation_code.as_deref(), Some(""));
        assert_eq!(
            details[1].rejection_reason,
            "ESTADO SIGLA DO ESTADO INVÁLIDA"
        );
    }

    #[test]
    fn test_decode_all_stops_on_malformed_date() {
        let result = decode_all(Bank::Itau, read_csv_stream(ITAU_FIELDS.as_bytes()));

        match result {
            Err(ProcessError::InvalidRecord(DecodeError::MalformedDate { field, raw })) => {
                assert_eq!(field, Field::CreditDate);
                assert_eq!(raw, "310424");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_process_csv_stream() {
        let mut output = Vec::new();

        let count =
            process_csv_stream(Bank::Itau, ITAU_FIELDS.as_bytes(), &mut output, false).unwrap();
        assert_eq!(count, 2);

        let report = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = report.trim().split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("bank,sequence_number,occurrence_code,"));
        assert!(lines[1].starts_with("341,2,6,LIQUIDAÇÃO NORMAL,false,false,"));
        assert!(lines[1].contains("2024-03-16T00:00:00"));
    }

    #[test]
    fn test_process_csv_stream_strict() {
        let mut output = Vec::new();

        let result = process_csv_stream(Bank::Itau, ITAU_FIELDS.as_bytes(), &mut output, true);
        assert!(result.is_err());
        assert!(output.is_empty());
    }

    #[test]
    fn test_process_csv_stream_other_bank() {
        let data = "codigo_de_ocorrencia,valor_outros_creditos,valor_juros,valor_multa\n\
                    02,5.00,1.00,0.50";
        let details = decode_all(Bank::Cef, read_csv_stream(data.as_bytes())).unwrap();

        assert_eq!(details.len(), 1);
        assert_eq!(details[0].occurrence_description.as_deref(), Some("Baixa Confirmada"));
        assert_eq!(details[0].other_credits_value, dec!(0));
        assert_eq!(details[0].late_fee_value, dec!(1.50));
        assert_eq!(details[0].liquidation_code, None);
    }
}
