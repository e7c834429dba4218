use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::bank::Bank;
use crate::error::DecodeError;
use crate::fields::{Field, FieldSource};
use crate::liquidation::describe_liquidation;
use crate::occurrence::{describe_occurrence, is_rejected_settlement_code, is_settlement_code};
use crate::rejection::describe_rejection;
use crate::value::{parse_amount, parse_date, parse_int};

/// One detail line of a return file, already split into named fields.
///
/// The record is read-only: every accessor recomputes from the raw fields and
/// the static tables, so calling one twice always gives the same answer.
#[derive(Debug, Clone)]
pub struct DetailRecord<S> {
    bank: Bank,
    source: S,
}

impl<S: FieldSource> DetailRecord<S> {
    pub fn new(bank: Bank, source: S) -> Self {
        DetailRecord { bank, source }
    }

    pub fn bank(&self) -> Bank {
        self.bank
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    #[inline]
    fn raw(&self, field: Field) -> Option<&str> {
        self.source.field(field.name())
    }

    #[inline]
    fn text(&self, field: Field) -> &str {
        self.raw(field).unwrap_or_default().trim()
    }

    #[inline]
    fn amount(&self, field: Field) -> Decimal {
        parse_amount(field, self.raw(field))
    }

    #[inline]
    fn date(&self, field: Field) -> Result<Option<NaiveDateTime>, DecodeError> {
        parse_date(field, self.raw(field))
    }

    /// Occurrence code, `0` when absent or not numeric.
    pub fn occurrence_code(&self) -> u32 {
        parse_int(self.raw(Field::OccurrenceCode))
    }

    /// Whether the slip leaves the active collection ("baixa").
    pub fn is_settlement(&self) -> bool {
        is_settlement_code(self.bank, self.occurrence_code())
    }

    pub fn is_rejected_settlement(&self) -> bool {
        is_rejected_settlement_code(self.occurrence_code())
    }

    pub fn occurrence_description(&self) -> Option<&'static str> {
        describe_occurrence(self.bank, self.occurrence_code())
    }

    /// Amount credited to the account.
    pub fn received_value(&self) -> Decimal {
        self.amount(Field::PrincipalValue)
    }

    /// Face value of the slip.
    pub fn face_value(&self) -> Decimal {
        self.amount(Field::FaceValue)
    }

    pub fn fee_value(&self) -> Decimal {
        self.amount(Field::FeeValue)
    }

    /// IOF, the tax on financial operations.
    pub fn tax_value(&self) -> Decimal {
        self.amount(Field::TaxValue)
    }

    /// Discount granted before issue.
    pub fn discount_value(&self) -> Decimal {
        self.amount(Field::DiscountValue)
    }

    /// Rebate granted after issue.
    pub fn rebate_value(&self) -> Decimal {
        self.amount(Field::RebateValue)
    }

    /// CEF fills this position with unrelated data, so it always reads zero there.
    pub fn other_credits_value(&self) -> Decimal {
        match self.bank {
            Bank::Cef => Decimal::ZERO,
            _ => self.amount(Field::OtherCreditsValue),
        }
    }

    /// Interest plus fine. CEF reports the two separately.
    pub fn late_fee_value(&self) -> Decimal {
        match self.bank {
            Bank::Cef => self.amount(Field::InterestValue) + self.amount(Field::FineValue),
            _ => self.amount(Field::LateFeeValue),
        }
    }

    pub fn document_number(&self) -> &str {
        self.text(Field::DocumentNumber)
    }

    pub fn our_number(&self) -> &str {
        self.text(Field::OurNumber)
    }

    pub fn due_date(&self) -> Result<Option<NaiveDateTime>, DecodeError> {
        self.date(Field::DueDate)
    }

    /// Day the money reached the account.
    pub fn credit_date(&self) -> Result<Option<NaiveDateTime>, DecodeError> {
        self.date(Field::CreditDate)
    }

    pub fn occurrence_date(&self) -> Result<Option<NaiveDateTime>, DecodeError> {
        self.date(Field::OccurrenceDate)
    }

    pub fn wallet(&self) -> &str {
        self.text(Field::Wallet)
    }

    pub fn agency(&self) -> &str {
        self.text(Field::Agency)
    }

    pub fn collecting_agency(&self) -> &str {
        self.text(Field::CollectingAgency)
    }

    pub fn collecting_agency_check_digit(&self) -> &str {
        self.text(Field::CollectingAgencyCheckDigit)
    }

    pub fn sequence_number(&self) -> u32 {
        parse_int(self.raw(Field::SequenceNumber))
    }

    /// `None` when the bank's layout has no liquidation code.
    pub fn liquidation_code(&self) -> Option<&str> {
        self.raw(Field::LiquidationCode).map(str::trim)
    }

    pub fn liquidation_description(&self) -> Option<&'static str> {
        self.liquidation_code()
            .and_then(|code| describe_liquidation(self.bank, code))
    }

    /// Slip registered for electronic presentment (DDA).
    pub fn is_dda(&self) -> bool {
        match self.raw(Field::DdaFlag) {
            Some(raw) => {
                let raw = raw.trim();
                !raw.is_empty() && raw.bytes().any(|b| b != b'0')
            }
            None => false,
        }
    }

    /// Reason packed in the `erros` field, empty when none applies.
    pub fn rejection_reason(&self) -> &'static str {
        let packed = self.raw(Field::Errors).unwrap_or_default();
        describe_rejection(self.bank, self.occurrence_code(), packed)
    }

    pub fn decode(&self) -> Result<DecodedDetail, DecodeError> {
        Ok(DecodedDetail {
            bank: self.bank.code(),
            sequence_number: self.sequence_number(),
            occurrence_code: self.occurrence_code(),
            occurrence_description: self.occurrence_description().map(str::to_string),
            settlement: self.is_settlement(),
            rejected_settlement: self.is_rejected_settlement(),
            document_number: self.document_number().to_string(),
            our_number: self.our_number().to_string(),
            wallet: self.wallet().to_string(),
            agency: self.agency().to_string(),
            collecting_agency: self.collecting_agency().to_string(),
            collecting_agency_check_digit: self.collecting_agency_check_digit().to_string(),
            due_date: self.due_date()?,
            credit_date: self.credit_date()?,
            occurrence_date: self.occurrence_date()?,
            face_value: self.face_value(),
            received_value: self.received_value(),
            fee_value: self.fee_value(),
            tax_value: self.tax_value(),
            discount_value: self.discount_value(),
            rebate_value: self.rebate_value(),
            other_credits_value: self.other_credits_value(),
            late_fee_value: self.late_fee_value(),
            liquidation_code: self.liquidation_code().map(str::to_string),
            liquidation_description: self.liquidation_description().map(str::to_string),
            dda: self.is_dda(),
            rejection_reason: self.rejection_reason().to_string(),
        })
    }
}

/// Snapshot of every derived value of a [`DetailRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedDetail {
    pub bank: u16,
    pub sequence_number: u32,
    pub occurrence_code: u32,
    pub occurrence_description: Option<String>,
    pub settlement: bool,
    pub rejected_settlement: bool,
    pub document_number: String,
    pub our_number: String,
    pub wallet: String,
    pub agency: String,
    pub collecting_agency: String,
    pub collecting_agency_check_digit: String,
    pub due_date: Option<NaiveDateTime>,
    pub credit_date: Option<NaiveDateTime>,
    pub occurrence_date: Option<NaiveDateTime>,
    pub face_value: Decimal,
    pub received_value: Decimal,
    pub fee_value: Decimal,
    pub tax_value: Decimal,
    pub discount_value: Decimal,
    pub rebate_value: Decimal,
    pub other_credits_value: Decimal,
    pub late_fee_value: Decimal,
    pub liquidation_code: Option<String>,
    pub liquidation_description: Option<String>,
    pub dda: bool,
    pub rejection_reason: String,
}
