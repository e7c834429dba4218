//! Rejection reasons and payer allegations packed into the `erros` field.
//!
//! The field is a run of fixed-width sub-codes with no delimiter. Both the
//! width and the table depend on the occurrence code of the same record.

use crate::bank::Bank;
use crate::table::{CodeTable, lookup};

pub const PAYER_ALLEGATION: u32 = 25;
pub const INFORMATIONAL_MESSAGE: u32 = 2;
pub const ENTRY_REJECTED: u32 = 3;
pub const INSTRUCTION_REJECTED: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReasonTable {
    pub width: usize,
    pub entries: CodeTable<&'static str>,
}

impl ReasonTable {
    /// First chunk of `packed` found in the table. Later chunks are never
    /// consulted once one matches; unknown chunks are skipped.
    pub fn describe(&self, packed: &str) -> Option<&'static str> {
        split_chunks(packed, self.width).find_map(|chunk| lookup(self.entries, chunk))
    }
}

/// Only Itaú publishes these tables.
pub fn reason_table(bank: Bank, occurrence_code: u32) -> Option<ReasonTable> {
    if bank != Bank::Itau {
        return None;
    }

    let (width, entries) = match occurrence_code {
        PAYER_ALLEGATION => (4, ITAU_PAYER_ALLEGATIONS),
        INFORMATIONAL_MESSAGE => (2, ITAU_INFORMATIONAL_MESSAGES),
        ENTRY_REJECTED => (2, ITAU_ENTRY_REJECTIONS),
        INSTRUCTION_REJECTED => (2, ITAU_INSTRUCTION_REJECTIONS),
        _ => return None,
    };
    Some(ReasonTable { width, entries })
}

/// Empty when no table applies or no chunk matches.
pub fn describe_rejection(bank: Bank, occurrence_code: u32, packed: &str) -> &'static str {
    reason_table(bank, occurrence_code)
        .and_then(|table| table.describe(packed))
        .unwrap_or_default()
}

/// Consecutive `width`-byte slices of `packed`, the last one possibly short.
/// Input shorter than one chunk yields nothing.
pub fn split_chunks(packed: &str, width: usize) -> impl Iterator<Item = &str> {
    let bytes = if width == 0 || packed.len() < width {
        &[][..]
    } else {
        packed.as_bytes()
    };

    bytes
        .chunks(width.max(1))
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
}

static ITAU_PAYER_ALLEGATIONS: CodeTable<&str> = &[
    ("1313", "SOLICITA A PRORROGAÇÃO DO VENCIMENTO PARA:"),
    ("1321", "SOLICITA A DISPENSA DOS JUROS DE MORA"),
    ("1339", "NÃO RECEBEU A MERCADORIA"),
    ("1347", "A MERCADORIA CHEGOU ATRASADA"),
    ("1354", "A MERCADORIA CHEGOU AVARIADA"),
    ("1362", "A MERCADORIA CHEGOU INCOMPLETA"),
    ("1370", "A MERCADORIA NÃO CONFERE COM O PEDIDO"),
    ("1388", "A MERCADORIA ESTÁ À DISPOSIÇÃO"),
    ("1396", "DEVOLVEU A MERCADORIA"),
    ("1404", "NÃO RECEBEU A FATURA"),
    ("1412", "A FATURA ESTÁ EM DESACORDO COM A NOTA FISCAL"),
    ("1420", "O PEDIDO DE COMPRA FOI CANCELADO"),
    ("1438", "A DUPLICATA FOI CANCELADA"),
    ("1446", "QUE NADA DEVE OU COMPROU"),
    ("1453", "QUE MANTÉM ENTENDIMENTOS COM O SACADOR"),
    ("1461", "QUE PAGARÁ O TÍTULO EM:"),
    ("1479", "QUE PAGOU O TÍTULO DIRETAMENTE AO BENEFICIÁRIO EM:"),
    ("1487", "QUE PAGARÁ O TÍTULO DIRETAMENTE AO BENEFICIÁRIO EM:"),
    ("1495", "QUE O VENCIMENTO CORRETO É:"),
    ("1503", "QUE TEM DESCONTO OU ABATIMENTO DE:"),
    ("1719", "PAGADOR NÃO FOI LOCALIZADO; CONFIRMAR ENDEREÇO"),
    ("1727", "PAGADOR ESTÁ EM REGIME DE CONCORDATA"),
    ("1735", "PAGADOR ESTÁ EM REGIME DE FALÊNCIA"),
    ("1750", "PAGADOR SE RECUSA A PAGAR JUROS BANCÁRIOS"),
    ("1768", "PAGADOR SE RECUSA A PAGAR COMISSÃO DE PERMANÊNCIA"),
    ("1776", "NÃO FOI POSSÍVEL A ENTREGA DO BOLETO AO PAGADOR"),
    ("1784", "BOLETO NÃO ENTREGUE, MUDOU-SE / DESCONHECIDO"),
    ("1792", "BOLETO NÃO ENTREGUE, CEP ERRADO / INCOMPLETO"),
    ("1800", "BOLETO NÃO ENTREGUE, NÚMERO NÃO EXISTE/ENDEREÇO INCOMPLETO"),
    (
        "1818",
        "BOLETO NÃO RETIRADO PELO PAGADOR. REENVIADO PELO CORREIO PARA CARTEIRAS COM EMISSÃO PELO BANCO",
    ),
    ("1826", "ENDEREÇO DE E-MAIL INVÁLIDO/COBRANÇA MENSAGEM. BOLETO ENVIADO PELO CORREIO"),
    ("1834", "BOLETO DDA, DIVIDA RECONHECIDA PELO PAGADOR"),
    ("1842", "BOLETO DDA, DIVIDA NÃO RECONHECIDA PELO PAGADOR"),
];

static ITAU_INFORMATIONAL_MESSAGES: CodeTable<&str> = &[
    ("01", "CEP SEM ATENDIMENTO DE PROTESTO NO MOMENTO"),
    (
        "02",
        "ESTADO COM DETERMINAÇÃO LEGAL QU EIMPEDE A INSCRIÇÃO DE INADIMPLENTES NOS CADASTROS DE PROTEÇÃO AO CRÉDITO NO PRAZO SOLICITADO - PRAZO SUPERIOR AO SOLICITADO",
    ),
    ("03", "BOLETO NÃO LIQUIDADO NO DESCONTO DE DUPLICATAS E TRANSFERIDO PARA COBRANÇA SIMPLES"),
];

static ITAU_ENTRY_REJECTIONS: CodeTable<&str> = &[
    ("03", "AG. COBRADORA CEP SEM ATENDIMENTO DE PROTESTO NO MOMENTO"),
    ("04", "ESTADO SIGLA DO ESTADO INVÁLIDA"),
    ("05", "DATA VENCIMENTO PRAZO DA OPERAÇÃO MENOR QUE PRAZO MÍNIMO OU MAIOR QUE O MÁXIMO"),
    ("07", "VALOR DO TÍTULO VALOR DO TÍTULO MAIOR QUE 10.000.000,00"),
    ("08", "NOME DO PAGADOR NÃO INFORMADO OU DESLOCADO"),
    ("09", "AGENCIA/CONTA AGÊNCIA ENCERRADA"),
    ("10", "LOGRADOURO NÃO INFORMADO OU DESLOCADO"),
    ("11", "CEP CEP NÃO NUMÉRICO OU CEP INVÁLIDO"),
    ("12", "SACADOR / AVALISTA NOME NÃO INFORMADO OU DESLOCADO (BANCOS CORRESPONDENTES)"),
    ("13", "ESTADO/CEP CEP INCOMPATÍVEL COM A SIGLA DO ESTADO"),
    ("14", "NOSSO NÚMERO NOSSO NÚMERO JÁ REGISTRADO NO CADASTRO DO BANCO OU FORA DA FAIXA"),
    ("15", "NOSSO NÚMERO NOSSO NÚMERO EM DUPLICIDADE NO MESMO MOVIMENTO"),
    ("18", "DATA DE ENTRADA DATA DE ENTRADA INVÁLIDA PARA OPERAR COM ESTA CARTEIRA"),
    ("19", "OCORRÊNCIA OCORRÊNCIA INVÁLIDA"),
    (
        "21",
        "AG. COBRADORA CARTEIRA NÃO ACEITA DEPOSITÁRIA CORRESPONDENTE ESTADO DA AGÊNCIA DIFERENTE DO ESTADO DO PAGADOR AG. COBRADORA NÃO CONSTA NO CADASTRO OU ENCERRANDO",
    ),
    ("22", "CARTEIRA CARTEIRA NÃO PERMITIDA (NECESSÁRIO CADASTRAR FAIXA LIVRE)"),
    ("26", "AGÊNCIA/CONTA AGÊNCIA/CONTA NÃO LIBERADA PARA OPERAR COM COBRANÇA"),
    ("27", "CNPJ INAPTO CNPJ DO BENEFICIÁRIO INAPTO DEVOLUÇÃO DE TÍTULO EM GARANTIA"),
    ("29", "CÓDIGO EMPRESA CATEGORIA DA CONTA INVÁLIDA"),
    ("30", "ENTRADA BLOQUEADA ENTRADAS BLOQUEADAS, CONTA SUSPENSA EM COBRANÇA"),
    ("31", "AGÊNCIA/CONTA CONTA NÃO TEM PERMISSÃO PARA PROTESTAR (CONTATE SEU GERENTE)"),
    ("35", "VALOR DO IOF IOF MAIOR QUE 5%"),
    ("36", "QTDADE DE MOEDA QUANTIDADE DE MOEDA INCOMPATÍVEL COM VALOR DO TÍTULO"),
    ("37", "CNPJ/CPF DO PAGADOR NÃO NUMÉRICO OU IGUAL A ZEROS"),
    ("42", "NOSSO NÚMERO NOSSO NÚMERO FORA DE FAIXA"),
    ("52", "AG. COBRADORA EMPRESA NÃO ACEITA BANCO CORRESPONDENTE"),
    ("53", "AG. COBRADORA EMPRESA NÃO ACEITA BANCO CORRESPONDENTE - COBRANÇA MENSAGEM"),
    ("54", "DATA DE VENCTO BANCO CORRESPONDENTE - TÍTULO COM VENCIMENTO INFERIOR A 15 DIAS"),
    ("55", "DEP/BCO CORRESP CEP NÃO PERTENCE À DEPOSITÁRIA INFORMADA"),
    ("56", "DT VENCTO/BCO CORRESP VENCTO SUPERIOR A 180 DIAS DA DATA DE ENTRADA"),
    ("57", "DATA DE VENCTO CEP SÓ DEPOSITÁRIA BCO DO BRASIL COM VENCTO INFERIOR A 8 DIAS"),
    ("60", "ABATIMENTO VALOR DO ABATIMENTO INVÁLIDO"),
    ("61", "JUROS DE MORA JUROS DE MORA MAIOR QUE O PERMITIDO"),
    ("62", "DESCONTO VALOR DO DESCONTO MAIOR QUE VALOR DO TÍTULO"),
    (
        "63",
        "DESCONTO DE ANTECIPAÇÃO VALOR DA IMPORTÂNCIA POR DIA DE DESCONTO (IDD) NÃO PERMITIDO",
    ),
    ("64", "DATA DE EMISSÃO DATA DE EMISSÃO DO TÍTULO INVÁLIDA"),
    ("65", "TAXA FINANCTO TAXA INVÁLIDA (VENDOR)"),
    ("66", "DATA DE VENCTO INVALIDA/FORA DE PRAZO DE OPERAÇÃO (MÍNIMO OU MÁXIMO)"),
    ("67", "VALOR/QTIDADE VALOR DO TÍTULO/QUANTIDADE DE MOEDA INVÁLIDO"),
    ("68", "CARTEIRA CARTEIRA INVÁLIDA OU NÃO CADASTRADA NO INTERCÂMBIO DA COBRANÇA"),
    ("69", "CARTEIRA CARTEIRA INVÁLIDA PARA TÍTULOS COM RATEIO DE CRÉDITO"),
    ("70", "AGÊNCIA/CONTA BENEFICIÁRIO NÃO CADASTRADO PARA FAZER RATEIO DE CRÉDITO"),
    ("78", "AGÊNCIA/CONTA DUPLICIDADE DE AGÊNCIA/CONTA BENEFICIÁRIA DO RATEIO DE CRÉDITO"),
    (
        "80",
        "AGÊNCIA/CONTA QUANTIDADE DE CONTAS BENEFICIÁRIAS DO RATEIO MAIOR DO QUE O PERMITIDO (MÁXIMO DE 30 CONTAS POR TÍTULO)",
    ),
    ("81", "AGÊNCIA/CONTA CONTA PARA RATEIO DE CRÉDITO INVÁLIDA / NÃO PERTENCE AO ITAÚ"),
    (
        "82",
        "DESCONTO/ABATI-MENTO DESCONTO/ABATIMENTO NÃO PERMITIDO PARA TÍTULOS COM RATEIO DE CRÉDITO",
    ),
    (
        "83",
        "VALOR DO TÍTULO VALOR DO TÍTULO MENOR QUE A SOMA DOS VALORES ESTIPULADOS PARA RATEIO",
    ),
    (
        "84",
        "AGÊNCIA/CONTA AGÊNCIA/CONTA BENEFICIÁRIA DO RATEIO É A CENTRALIZADORA DE CRÉDITO DO BENEFICIÁRIO",
    ),
    (
        "85",
        "AGÊNCIA/CONTA AGÊNCIA/CONTA DO BENEFICIÁRIO É CONTRATUAL / RATEIO DE CRÉDITO NÃO PERMITIDO",
    ),
    (
        "86",
        "TIPO DE VALOR CÓDIGO DO TIPO DE VALOR INVÁLIDO / NÃO PREVISTO PARA TÍTULOS COM RATEIO DE CRÉDITO",
    ),
    (
        "87",
        "AGÊNCIA/CONTA REGISTRO TIPO 4 SEM INFORMAÇÃO DE AGÊNCIAS/CONTAS BENEFICIÁRIAS DO RATEIO",
    ),
    (
        "90",
        "NRO DA LINHA COBRANÇA MENSAGEM - NÚMERO DA LINHA DA MENSAGEM INVÁLIDO OU QUANTIDADE DE LINHAS EXCEDIDAS",
    ),
    (
        "97",
        "SEM MENSAGEM COBRANÇA MENSAGEM SEM MENSAGEM (SÓ DE CAMPOS FIXOS), PORÉM COM REGISTRO DO TIPO 7 OU 8",
    ),
    (
        "98",
        "FLASH INVÁLIDO REGISTRO MENSAGEM SEM FLASH CADASTRADO OU FLASH INFORMADO DIFERENTE DO CADASTRADO",
    ),
    (
        "99",
        "FLASH INVÁLIDO CONTA DE COBRANÇA COM FLASH CADASTRADO E SEM REGISTRO DE MENSAGEM CORRESPONDENTE",
    ),
];

static ITAU_INSTRUCTION_REJECTIONS: CodeTable<&str> = &[
    ("01", "INSTRUÇÃO/OCORRÊNCIA NÃO EXISTENTE"),
    ("03", "CONTA NÃO TEM PERMISSÃO PARA PROTESTAR (CONTATE SEU GERENTE)"),
    ("06", "NOSSO NÚMERO IGUAL A ZEROS"),
    ("09", "CNPJ/CPF DO SACADOR/AVALISTA INVÁLIDO"),
    ("10", "VALOR DO ABATIMENTO IGUAL OU MAIOR QUE O VALOR DO TÍTULO"),
    ("11", "SEGUNDA INSTRUÇÃO/OCORRÊNCIA NÃO EXISTENTE"),
    ("14", "REGISTRO EM DUPLICIDADE"),
    ("15", "CNPJ/CPF INFORMADO SEM NOME DO SACADOR/AVALISTA"),
    ("19", "VALOR DO ABATIMENTO MAIOR QUE 90% DO VALOR DO TÍTULO"),
    ("20", "EXISTE SUSTACAO DE PROTESTO PENDENTE PARA O TITULO"),
    ("21", "TÍTULO NÃO REGISTRADO NO SISTEMA"),
    ("22", "TÍTULO BAIXADO OU LIQUIDADO"),
    ("23", "INSTRUÇÃO NÃO ACEITA"),
    ("24", "INSTRUÇÃO INCOMPATÍVEL - EXISTE INSTRUÇÃO DE PROTESTO PARA O TÍTULO"),
    ("25", "INSTRUÇÃO INCOMPATÍVEL - NÃO EXISTE INSTRUÇÃO DE PROTESTO PARA O TÍTULO"),
    ("26", "INSTRUÇÃO NÃO ACEITA POR JÁ TER SIDO EMITIDA A ORDEM DE PROTESTO AO CARTÓRIO"),
    ("27", "INSTRUÇÃO NÃO ACEITA POR NÃO TER SIDO EMITIDA A ORDEM DE PROTESTO AO CARTÓRIO"),
    ("28", "JÁ EXISTE UMA MESMA INSTRUÇÃO CADASTRADA ANTERIORMENTE PARA O TÍTULO"),
    ("29", "VALOR LÍQUIDO + VALOR DO ABATIMENTO DIFERENTE DO VALOR DO TÍTULO REGISTRADO"),
    ("30", "EXISTE UMA INSTRUÇÃO DE NÃO PROTESTAR ATIVA PARA O TÍTULO"),
    ("31", "EXISTE UMA OCORRÊNCIA DO PAGADOR QUE BLOQUEIA A INSTRUÇÃO"),
    ("32", "DEPOSITÁRIA DO TÍTULO = 9999 OU CARTEIRA NÃO ACEITA PROTESTO"),
    (
        "33",
        "ALTERAÇÃO DE VENCIMENTO IGUAL À REGISTRADA NO SISTEMA OU QUE TORNA O TÍTULO VENCIDO",
    ),
    (
        "34",
        "INSTRUÇÃO DE EMISSÃO DE AVISO DE COBRANÇA PARA TÍTULO VENCIDO ANTES DO VENCIMENTO",
    ),
    ("35", "SOLICITAÇÃO DE CANCELAMENTO DE INSTRUÇÃO INEXISTENTE"),
    ("36", "TÍTULO SOFRENDO ALTERAÇÃO DE CONTROLE (AGÊNCIA/CONTA/CARTEIRA/NOSSO NÚMERO)"),
    ("37", "INSTRUÇÃO NÃO PERMITIDA PARA A CARTEIRA"),
    ("38", "INSTRUÇÃO NÃO PERMITIDA PARA TÍTULO COM RATEIO DE CRÉDITO"),
    (
        "40",
        "INSTRUÇÃO INCOMPATÍVEL - NÃO EXISTE INSTRUÇÃO DE NEGATIVAÇÃO EXPRESSA PARA O TÍTULO",
    ),
    ("41", "INSTRUÇÃO NÃO PERMITIDA - TÍTULO COM ENTRADA EM NEGATIVAÇÃO EXPRESSA"),
    ("42", "INSTRUÇÃO NÃO PERMITIDA - TÍTULO COM NEGATIVAÇÃO EXPRESSA CONCLUÍDA"),
    (
        "43",
        "PRAZO INVÁLIDO PARA NEGATIVAÇÃO EXPRESSA - MÍNIMO: 02 DIAS CORRIDOS APÓS O VENCIMENTO",
    ),
    ("45", "INSTRUÇÃO INCOMPATÍVEL PARA O MESMO TÍTULO NESTA DATA"),
    ("47", "INSTRUÇÃO NÃO PERMITIDA - ESPÉCIE INVÁLIDA"),
    ("48", "DADOS DO PAGADOR INVÁLIDOS ( CPF / CNPJ / NOME )"),
    ("49", "DADOS DO ENDEREÇO DO PAGADOR INVÁLIDOS"),
    ("50", "DATA DE EMISSÃO DO TÍTULO INVÁLIDA"),
    ("51", "INSTRUÇÃO NÃO PERMITIDA - TÍTULO COM NEGATIVAÇÃO EXPRESSA AGENDADA"),
];
