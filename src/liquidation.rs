//! Liquidation channel: where or how the payer paid.

use crate::bank::Bank;
use crate::table::{CodeTable, lookup};

/// Unrecognized channel codes are common and answer `None`.
pub fn describe_liquidation(bank: Bank, code: &str) -> Option<&'static str> {
    let table = match bank {
        Bank::Itau => ITAU_LIQUIDATION_CHANNELS,
        _ => return None,
    };
    lookup(table, code)
}

static ITAU_LIQUIDATION_CHANNELS: CodeTable<&str> = &[
    ("AA", "CAIXA ELETRÔNICO BANCO ITAÚ"),
    ("AC", "PAGAMENTO EM CARTÓRIO AUTOMATIZADO"),
    ("AO", "ACERTO ONLINE"),
    ("B0", "OUTROS BANCOS - RECEBIMENTO OFF-LINE"),
    ("B1", "OUTROS BANCOS - PELO CÓDIGO DE BARRAS"),
    ("B2", "OUTROS BANCOS - PELA LINHA DIGITÁVEL"),
    ("B3", "OUTROS BANCOS - PELO AUTO ATENDIMENTO"),
    ("B4", "OUTROS BANCOS - RECEBIMENTO EM CASA LOTÉRICA"),
    ("B5", "OUTROS BANCOS - CORRESPONDENTE"),
    ("B6", "OUTROS BANCOS - TELEFONE"),
    (
        "B7",
        "OUTROS BANCOS - ARQUIVO ELETRÔNICO (Pagamento Efetuado por meio de troca de arquivos)",
    ),
    ("BC", "BANCOS CORRESPONDENTES"),
    ("BF", "ITAÚ BANKFONE"),
    ("BL", "ITAÚ BANKLINE"),
    ("CC", "AGÊNCIA ITAÚ - COM CHEQUE DE OUTRO BANCO ou (CHEQUE ITAÚ)*"),
    ("CI", "CORRESPONDENTE ITAÚ"),
    ("CK", "SISPAG - SISTEMA DE CONTAS A PAGAR ITAÚ"),
    ("CP", "AGÊNCIA ITAÚ - POR DÉBITO EM CONTA CORRENTE, CHEQUE ITAÚ* OU DINHEIRO"),
    ("DG", "AGÊNCIA ITAÚ - CAPTURADO EM OFF-LINE"),
    ("EA", "TERMINAL DE CAIXA"),
    ("LC", "PAGAMENTO EM CARTÓRIO DE PROTESTO COM CHEQUE A COMPENSAR"),
    (
        "Q0",
        "AGENDAMENTO - PAGAMENTO AGENDADO VIA BANKLINE OU OUTRO CANAL ELETRÔNICO E LIQUIDADO NA DATA INDICADA",
    ),
    ("RA", "DIGITAÇÃO - REALIMENTAÇÃO AUTOMÁTICA"),
    ("ST", "PAGAMENTO VIA SELTEC**"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::assert_sorted;

    #[test]
    fn test_itau_channels() {
        assert_eq!(describe_liquidation(Bank::Itau, "AA"), Some("CAIXA ELETRÔNICO BANCO ITAÚ"));
        assert_eq!(describe_liquidation(Bank::Itau, "B1"), Some("OUTROS BANCOS - PELO CÓDIGO DE BARRAS"));
        assert_eq!(describe_liquidation(Bank::Itau, "ST"), Some("PAGAMENTO VIA SELTEC**"));
    }

    #[test]
    fn test_unknown_channel_is_absent() {
        assert_eq!(describe_liquidation(Bank::Itau, "ZZ"), None);
        assert_eq!(describe_liquidation(Bank::Itau, ""), None);
        assert_eq!(describe_liquidation(Bank::Itau, "aa"), None);
    }

    #[test]
    fn test_other_banks_have_no_channels() {
        assert_eq!(describe_liquidation(Bank::Bradesco, "AA"), None);
        assert_eq!(describe_liquidation(Bank::Cef, "BC"), None);
        assert_eq!(describe_liquidation(Bank::Other(33), "B1"), None);
    }

    #[test]
    fn test_table_sorted() {
        assert_sorted("itau channels", ITAU_LIQUIDATION_CHANNELS);
    }
}
