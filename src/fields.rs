use std::collections::HashMap;

/// Raw fields of a detail record, as named by the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    OccurrenceCode,
    PrincipalValue,
    FaceValue,
    FeeValue,
    TaxValue,
    DiscountValue,
    RebateValue,
    OtherCreditsValue,
    LateFeeValue,
    InterestValue,
    FineValue,
    DocumentNumber,
    OurNumber,
    DueDate,
    CreditDate,
    OccurrenceDate,
    Wallet,
    Agency,
    CollectingAgency,
    CollectingAgencyCheckDigit,
    SequenceNumber,
    LiquidationCode,
    Errors,
    DdaFlag,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::OccurrenceCode => "codigo_de_ocorrencia",
            Field::PrincipalValue => "valor_principal",
            Field::FaceValue => "valor_do_titulo",
            Field::FeeValue => "valor_tarifa",
            Field::TaxValue => "valor_iof",
            Field::DiscountValue => "valor_desconto",
            Field::RebateValue => "valor_abatimento",
            Field::OtherCreditsValue => "valor_outros_creditos",
            Field::LateFeeValue => "valor_mora_multa",
            Field::InterestValue => "valor_juros",
            Field::FineValue => "valor_multa",
            Field::DocumentNumber => "numero_do_documento",
            Field::OurNumber => "nosso_numero",
            Field::DueDate => "data_vencimento",
            Field::CreditDate => "data_credito",
            Field::OccurrenceDate => "data_de_ocorrencia",
            Field::Wallet => "carteira",
            Field::Agency => "agencia",
            Field::CollectingAgency => "agencia_cobradora",
            Field::CollectingAgencyCheckDigit => "agencia_cobradora_dac",
            Field::SequenceNumber => "numero_sequencial",
            Field::LiquidationCode => "codigo_liquidacao",
            Field::Errors => "erros",
            Field::DdaFlag => "boleto_dda",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Populated record handed over by the layout engine.
///
/// Layouts differ per bank and per version, so a field may simply not exist.
/// `field` returns `None` in that case and callers must not assume presence.
pub trait FieldSource {
    fn field(&self, name: &str) -> Option<&str>;

    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

/// Field values keyed by layout name. One row of the layout engine's CSV output
/// deserializes straight into this.
pub type FieldMap = HashMap<String, String>;

impl FieldSource for HashMap<String, String> {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: FieldSource + ?Sized> FieldSource for &S {
    fn field(&self, name: &str) -> Option<&str> {
        (**self).field(name)
    }

    fn has_field(&self, name: &str) -> bool {
        (**self).has_field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_map_lookup() {
        let mut fields = FieldMap::new();
        fields.insert("codigo_de_ocorrencia".to_string(), "06".to_string());

        assert_eq!(fields.field(Field::OccurrenceCode.name()), Some("06"));
        assert!(fields.has_field("codigo_de_ocorrencia"));
        assert!(!fields.has_field(Field::LiquidationCode.name()));
        assert_eq!(fields.field("codigo_liquidacao"), None);
    }

    #[test]
    fn test_empty_value_still_exists() {
        let mut fields = FieldMap::new();
        fields.insert("boleto_dda".to_string(), String::new());

        assert!(fields.has_field(Field::DdaFlag.name()));
        assert_eq!(fields.field("boleto_dda"), Some(""));
    }

    #[test]
    fn test_field_display_uses_layout_name() {
        assert_eq!(format!("{}", Field::CollectingAgencyCheckDigit), "agencia_cobradora_dac");
    }
}
