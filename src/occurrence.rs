//! Occurrence codes: what event a detail record reports.
//!
//! The same small integer means different things at different banks, so every
//! lookup is keyed on the bank first and the code second.

use crate::bank::Bank;
use crate::table::{CodeTable, lookup};

pub const SETTLEMENT_CODES: &[u32] = &[9, 10, 32, 47, 59, 72];
pub const BANCO_DO_BRASIL_SETTLEMENT_CODES: &[u32] = &[6];
pub const REJECTED_SETTLEMENT_CODE: u32 = 15;

pub const UNKNOWN_OCCURRENCE: &str = "Código Inexistente";

/// Codes that remove a slip from the active collection ledger.
pub fn settlement_codes(bank: Bank) -> &'static [u32] {
    match bank {
        Bank::BancoDoBrasil => BANCO_DO_BRASIL_SETTLEMENT_CODES,
        _ => SETTLEMENT_CODES,
    }
}

pub fn is_settlement_code(bank: Bank, code: u32) -> bool {
    settlement_codes(bank).contains(&code)
}

pub fn is_rejected_settlement_code(code: u32) -> bool {
    code == REJECTED_SETTLEMENT_CODE
}

/// Description table selected by bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccurrenceTable {
    Bradesco,
    Cef,
    Default,
}

impl OccurrenceTable {
    pub fn for_bank(bank: Bank) -> Self {
        match bank {
            Bank::Bradesco => OccurrenceTable::Bradesco,
            Bank::Cef => OccurrenceTable::Cef,
            Bank::BancoDoBrasil | Bank::Itau | Bank::Other(_) => OccurrenceTable::Default,
        }
    }

    fn entries(&self) -> CodeTable<u32> {
        match self {
            OccurrenceTable::Bradesco => BRADESCO_OCCURRENCES,
            OccurrenceTable::Cef => CEF_OCCURRENCES,
            OccurrenceTable::Default => DEFAULT_OCCURRENCES,
        }
    }

    /// Bank-specific tables have no fallback: a miss is `None`. The default
    /// table answers every code, with [`UNKNOWN_OCCURRENCE`] for a miss.
    pub fn describe(&self, code: u32) -> Option<&'static str> {
        let found = lookup(self.entries(), &code);
        match self {
            OccurrenceTable::Default => Some(found.unwrap_or(UNKNOWN_OCCURRENCE)),
            OccurrenceTable::Bradesco | OccurrenceTable::Cef => found,
        }
    }
}

pub fn describe_occurrence(bank: Bank, code: u32) -> Option<&'static str> {
    let table = OccurrenceTable::for_bank(bank);
    let description = table.describe(code);
    if description.is_none() {
        tracing::debug!("No occurrence description for bank {} code {}", bank, code);
    }
    description
}

static BRADESCO_OCCURRENCES: CodeTable<u32> = &[
    (2, "Entrada Confirmada"),
    (3, "Entrada Rejeitada"),
    (6, "Liquidação normal"),
    (9, "Baixado Automat. via Arquivo"),
    (10, "Baixado conforme instruções da Agência"),
    (11, "Em Ser - Arquivo de Títulos pendentes"),
    (12, "Abatimento Concedido"),
    (13, "Abatimento Cancelado"),
    (14, "Vencimento Alterado"),
    (15, "Liquidação em Cartório"),
    (16, "Título Pago em Cheque - Vinculado"),
    (17, "Liquidação após baixa ou Título não registrado"),
    (18, "Acerto de Depositária (sem motivo)"),
    (19, "Confirmação Receb. Inst. de Protesto"),
    (20, "Confirmação Recebimento Instrução Sustação de Protesto"),
    (21, "Acerto do Controle do Participante"),
    (22, "Título Com Pagamento Cancelado"),
    (23, "Entrada do Título em Cartório"),
    (24, "Entrada rejeitada por CEP Irregular"),
    (27, "Baixa Rejeitada"),
    (28, "Débito de tarifas/custas"),
    (30, "Alteração de Outros Dados Rejeitados"),
    (32, "Instrução Rejeitada"),
    (33, "Confirmação Pedido Alteração Outros Dados"),
    (34, "Retirado de Cartório e Manutenção Carteira"),
    (35, "Desagendamento do débito automático"),
    (40, "Estorno de pagamento"),
    (55, "Sustado judicial"),
    (68, "Acerto dos dados do rateio de Crédito"),
    (69, "Cancelamento dos dados do rateio"),
];

static CEF_OCCURRENCES: CodeTable<u32> = &[
    (1, "Entrada Confirmada"),
    (2, "Baixa Confirmada"),
    (3, "Abatimento Concedido"),
    (4, "Abatimento Cancelado"),
    (5, "Vencimento Alterado"),
    (6, "Uso da Empresa Alterado"),
    (7, "Prazo de Protesto Alterado"),
    (8, "Prazo de Devolução Alterado"),
    (9, "Alteração Confirmada"),
    (10, "Alteração com Reemissão de Bloqueto Confirmada"),
    (11, "Alteração da Opção de Protesto para Devolução"),
    (12, "Alteração da Opção de Devolução para protesto"),
    (20, "Em Ser"),
    (21, "Liquidação"),
    (22, "Liquidação em Cartório"),
    (23, "Baixa por Devolução"),
    (24, "Baixa por Franco Pagamento"),
    (25, "Baixa por Protesto"),
    (26, "Título enviado para Cartório"),
    (27, "Sustação de Protesto"),
    (28, "Estorno de Protesto"),
    (29, "Estorno de Sustação de Protesto"),
    (30, "Alteração de Título"),
    (31, "Tarifa sobre Título Vencido"),
    (32, "Outras Tarifas de Alteração"),
    (33, "Estorno de Baixa/Liquidação"),
    (34, "Transferência de Carteira/Entrada"),
    (35, "Transferência de Carteira/Baixa"),
    (99, "Rejeição do Título - Cód. Rejeição informado nas POS 80 a 82"),
];

// Itaú numbering, also used for Banco do Brasil and every bank without its own table.
static DEFAULT_OCCURRENCES: CodeTable<u32> = &[
    (2, "ENTRADA CONFIRMADA COM POSSIBILIDADE DE MENSAGEM (NOTA 20 - TABELA 10)"),
    (3, "ENTRADA REJEITADA (NOTA 20 - TABELA 1)"),
    (4, "ALTERAÇÃO DE DADOS - NOVA ENTRADA OU ALTERAÇÃO/EXCLUSÃO DE DADOS ACATADA"),
    (5, "ALTERAÇÃO DE DADOS - BAIXA"),
    (6, "LIQUIDAÇÃO NORMAL"),
    (7, "LIQUIDAÇÃO PARCIAL - COBRANÇA INTELIGENTE (B2B)"),
    (8, "LIQUIDAÇÃO EM CARTÓRIO"),
    (9, "BAIXA SIMPLES"),
    (10, "BAIXA POR TER SIDO LIQUIDADO"),
    (11, "EM SER (SÓ NO RETORNO MENSAL)"),
    (12, "ABATIMENTO CONCEDIDO"),
    (13, "ABATIMENTO CANCELADO"),
    (14, "VENCIMENTO ALTERADO"),
    (15, "BAIXAS REJEITADAS (NOTA 20 - TABELA 4)"),
    (16, "INSTRUÇÕES REJEITADAS (NOTA 20 - TABELA 3)"),
    (17, "ALTERAÇÃO/EXCLUSÃO DE DADOS REJEITADOS (NOTA 20 - TABELA 2)"),
    (18, "COBRANÇA CONTRATUAL - INSTRUÇÕES/ALTERAÇÕES REJEITADAS/PENDENTES (NOTA 20 - TABELA 5)"),
    (19, "CONFIRMA RECEBIMENTO DE INSTRUÇÃO DE PROTESTO"),
    (20, "CONFIRMA RECEBIMENTO DE INSTRUÇÃO DE SUSTAÇÃO DE PROTESTO /TARIFA"),
    (21, "CONFIRMA RECEBIMENTO DE INSTRUÇÃO DE NÃO PROTESTAR"),
    (23, "TÍTULO ENVIADO A CARTÓRIO/TARIFA"),
    (24, "INSTRUÇÃO DE PROTESTO REJEITADA / SUSTADA / PENDENTE (NOTA 20 - TABELA 7)"),
    (25, "ALEGAÇÕES DO SACADO (NOTA 20 - TABELA 6)"),
    (26, "TARIFA DE AVISO DE COBRANÇA"),
    (27, "TARIFA DE EXTRATO POSIÇÃO (B40X)"),
    (28, "TARIFA DE RELAÇÃO DAS LIQUIDAÇÕES"),
    (29, "TARIFA DE MANUTENÇÃO DE TÍTULOS VENCIDOS"),
    (30, "DÉBITO MENSAL DE TARIFAS (PARA ENTRADAS E BAIXAS)"),
    (32, "BAIXA POR TER SIDO PROTESTADO"),
    (33, "CUSTAS DE PROTESTO"),
    (34, "CUSTAS DE SUSTAÇÃO"),
    (35, "CUSTAS DE CARTÓRIO DISTRIBUIDOR"),
    (36, "CUSTAS DE EDITAL"),
    (37, "TARIFA DE EMISSÃO DE BOLETO/TARIFA DE ENVIO DE DUPLICATA"),
    (38, "TARIFA DE INSTRUÇÃO"),
    (39, "TARIFA DE OCORRÊNCIAS"),
    (40, "TARIFA MENSAL DE EMISSÃO DE BOLETO/TARIFA MENSAL DE ENVIO DE DUPLICATA"),
    (41, "DÉBITO MENSAL DE TARIFAS - EXTRATO DE POSIÇÃO (B4EP/B4OX)"),
    (42, "DÉBITO MENSAL DE TARIFAS - OUTRAS INSTRUÇÕES"),
    (43, "DÉBITO MENSAL DE TARIFAS - MANUTENÇÃO DE TÍTULOS VENCIDOS"),
    (44, "DÉBITO MENSAL DE TARIFAS - OUTRAS OCORRÊNCIAS"),
    (45, "DÉBITO MENSAL DE TARIFAS - PROTESTO"),
    (46, "DÉBITO MENSAL DE TARIFAS - SUSTAÇÃO DE PROTESTO"),
    (47, "BAIXA COM TRANSFERÊNCIA PARA DESCONTO"),
    (48, "CUSTAS DE SUSTAÇÃO JUDICIAL"),
    (51, "TARIFA MENSAL REF A ENTRADAS BANCOS CORRESPONDENTES NA CARTEIRA"),
    (52, "TARIFA MENSAL BAIXAS NA CARTEIRA"),
    (53, "TARIFA MENSAL BAIXAS EM BANCOS CORRESPONDENTES NA CARTEIRA"),
    (54, "TARIFA MENSAL DE LIQUIDAÇÕES NA CARTEIRA"),
    (55, "TARIFA MENSAL DE LIQUIDAÇÕES EM BANCOS CORRESPONDENTES NA CARTEIRA"),
    (56, "CUSTAS DE IRREGULARIDADE"),
    (57, "INSTRUÇÃO CANCELADA (NOTA 20 - TABELA 8)"),
    (59, "BAIXA POR CRÉDITO EM C/C ATRAVÉS DO SISPAG"),
    (60, "ENTRADA REJEITADA CARNÊ (NOTA 20 - TABELA 1)"),
    (61, "TARIFA EMISSÃO AVISO DE MOVIMENTAÇÃO DE TÍTULOS (2154)"),
    (62, "DÉBITO MENSAL DE TARIFA - AVISO DE MOVIMENTAÇÃO DE TÍTULOS (2154)"),
    (63, "TÍTULO SUSTADO JUDICIALMENTE"),
    (64, "ENTRADA CONFIRMADA COM RATEIO DE CRÉDITO"),
    (69, "CHEQUE DEVOLVIDO (NOTA 20 - TABELA 9)"),
    (71, "ENTRADA REGISTRADA, AGUARDANDO AVALIAÇÃO"),
    (72, "BAIXA POR CRÉDITO EM C/C ATRAVÉS DO SISPAG SEM TÍTULO CORRESPONDENTE"),
    (73, "CONFIRMAÇÃO DE ENTRADA NA COBRANÇA SIMPLES - ENTRADA NÃO ACEITA NA COBRANÇA CONTRATUAL"),
    (76, "CHEQUE COMPENSADO"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::assert_sorted;

    #[test]
    fn test_settlement_codes_default_banks() {
        for bank in [Bank::Itau, Bank::Bradesco, Bank::Cef, Bank::Other(33)] {
            for code in 0..100 {
                assert_eq!(
                    is_settlement_code(bank, code),
                    [9, 10, 32, 47, 59, 72].contains(&code),
                    "bank {} code {}",
                    bank,
                    code
                );
            }
        }
    }

    #[test]
    fn test_settlement_codes_banco_do_brasil() {
        for code in 0..100 {
            assert_eq!(is_settlement_code(Bank::BancoDoBrasil, code), code == 6);
        }
    }

    #[test]
    fn test_rejected_settlement_code() {
        assert!(is_rejected_settlement_code(15));
        assert!(!is_rejected_settlement_code(0));
        assert!(!is_rejected_settlement_code(27));
    }

    #[test]
    fn test_table_for_bank() {
        assert_eq!(OccurrenceTable::for_bank(Bank::Bradesco), OccurrenceTable::Bradesco);
        assert_eq!(OccurrenceTable::for_bank(Bank::Cef), OccurrenceTable::Cef);
        assert_eq!(OccurrenceTable::for_bank(Bank::Itau), OccurrenceTable::Default);
        assert_eq!(OccurrenceTable::for_bank(Bank::BancoDoBrasil), OccurrenceTable::Default);
        assert_eq!(OccurrenceTable::for_bank(Bank::Other(756)), OccurrenceTable::Default);
    }

    #[test]
    fn test_same_code_differs_per_bank() {
        assert_eq!(describe_occurrence(Bank::Bradesco, 6), Some("Liquidação normal"));
        assert_eq!(describe_occurrence(Bank::Cef, 6), Some("Uso da Empresa Alterado"));
        assert_eq!(describe_occurrence(Bank::Itau, 6), Some("LIQUIDAÇÃO NORMAL"));
    }

    #[test]
    fn test_bank_specific_miss_is_absent() {
        assert_eq!(describe_occurrence(Bank::Bradesco, 76), None);
        assert_eq!(describe_occurrence(Bank::Cef, 76), None);
        assert_eq!(describe_occurrence(Bank::Cef, 0), None);
    }

    #[test]
    fn test_default_miss_is_unknown() {
        assert_eq!(describe_occurrence(Bank::Itau, 1), Some(UNKNOWN_OCCURRENCE));
        assert_eq!(describe_occurrence(Bank::Other(33), 0), Some(UNKNOWN_OCCURRENCE));
        assert_eq!(describe_occurrence(Bank::BancoDoBrasil, 99), Some(UNKNOWN_OCCURRENCE));
    }

    #[test]
    fn test_tables_sorted() {
        assert_sorted("bradesco", BRADESCO_OCCURRENCES);
        assert_sorted("cef", CEF_OCCURRENCES);
        assert_sorted("default", DEFAULT_OCCURRENCES);
    }
}
