use crate::error::PaymentError;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use std::fmt;

/// Timestamp format the bank expects in request chains.
pub const DATE_FORMAT: &str = "%d/%m/%Y:%H:%M:%S";
/// Date-only format used by installment slots.
pub const INSTALLMENT_DATE_FORMAT: &str = "%d/%m/%Y";

/// A monetary value with its currency suffix, rendered the way the bank
/// wants it in chains and forms: `10.00EUR`. The decimal scale is preserved,
/// so construct values with the scale the merchant intends to sign.
#[derive(Debug, PartialEq, Clone)]
pub struct Amount {
    pub value: Decimal,
    pub currency: String,
}

impl Amount {
    pub fn new(value: Decimal, currency: impl Into<String>) -> Self {
        Self {
            value,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.currency)
    }
}

/// One slot of a split-payment plan.
#[derive(Debug, PartialEq, Clone)]
pub struct Installment {
    pub date: NaiveDate,
    pub amount: Amount,
}

/// Optional split-payment plan, at most four installments. The chain always
/// reserves four (date, amount) slot pairs; unused slots render as empty
/// strings so the delimiter count never changes.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct InstallmentSchedule {
    installments: Vec<Installment>,
}

impl InstallmentSchedule {
    pub fn new(installments: Vec<Installment>) -> Result<Self, PaymentError> {
        if installments.len() > 4 {
            return Err(PaymentError::TooManyInstallments(installments.len()));
        }
        Ok(Self { installments })
    }

    pub fn count(&self) -> usize {
        self.installments.len()
    }

    /// The nine positional chain slots: count, then four (date, amount)
    /// pairs padded with empty strings.
    pub fn chain_slots(&self) -> [String; 9] {
        let mut slots: [String; 9] = Default::default();
        if self.installments.is_empty() {
            return slots;
        }
        slots[0] = self.installments.len().to_string();
        for (i, installment) in self.installments.iter().enumerate() {
            slots[1 + i * 2] = installment
                .date
                .format(INSTALLMENT_DATE_FORMAT)
                .to_string();
            slots[2 + i * 2] = installment.amount.to_string();
        }
        slots
    }
}

/// One outbound payment, stamped with the submission time.
#[derive(Debug, PartialEq, Clone)]
pub struct PaymentRequest {
    pub date: NaiveDateTime,
    pub amount: Amount,
    /// Merchant-unique transaction identifier.
    pub reference: String,
    /// Opaque free-text payload, echoed back in the callback. Often JSON;
    /// never interpreted here.
    pub texte_libre: String,
    /// Locale code, e.g. "FR".
    pub lgue: String,
    pub mail: String,
    pub installments: InstallmentSchedule,
}

impl PaymentRequest {
    pub fn new(
        amount: Amount,
        reference: impl Into<String>,
        texte_libre: impl Into<String>,
        lgue: impl Into<String>,
        mail: impl Into<String>,
    ) -> Self {
        Self {
            date: Local::now().naive_local(),
            amount,
            reference: reference.into(),
            texte_libre: texte_libre.into(),
            lgue: lgue.into(),
            mail: mail.into(),
            installments: InstallmentSchedule::default(),
        }
    }

    pub fn with_date(mut self, date: NaiveDateTime) -> Self {
        self.date = date;
        self
    }

    pub fn with_installments(mut self, installments: InstallmentSchedule) -> Self {
        self.installments = installments;
        self
    }

    pub fn formatted_date(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
