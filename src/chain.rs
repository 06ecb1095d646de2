use crate::callback::CallbackFields;
use crate::config::Configuration;
use crate::request::PaymentRequest;

/// Version literal the bank signs response chains with, regardless of the
/// configured request version.
const RESPONSE_VERSION: &str = "3.0";

/// Builds the string an outbound payment request is signed over:
///
/// `<TPE>*<date>*<montant>*<reference>*<texte-libre>*<version>*<lgue>*
/// <societe>*<mail>*<nbrech>*<dateech1>*<montantech1>*...*<montantech4>*`
///
/// Nineteen positional slots joined by `*` (18 delimiters). The last slot
/// (options) is always empty, and unused installment slots stay empty, so
/// the shape is identical with and without a split-payment plan. Field
/// order and delimiters are a wire contract with the bank's verifier: a
/// one-character deviation yields a non-matching digest with no diagnostic.
pub fn request_chain(config: &Configuration, req: &PaymentRequest) -> String {
    let date = req.formatted_date();
    let montant = req.amount.to_string();
    let slots = req.installments.chain_slots();

    let mut parts: Vec<&str> = vec![
        &config.tpe,
        &date,
        &montant,
        &req.reference,
        &req.texte_libre,
        &config.version,
        &req.lgue,
        &config.societe,
        &req.mail,
    ];
    parts.extend(slots.iter().map(String::as_str));
    parts.push("");
    parts.join("*")
}

/// Builds the string the bank signed its callback over:
///
/// `<TPE>*<date>*<montant>*<reference>*<texte-libre>*3.0*<code-retour>*
/// <cvx>*<vld>*<brand>*<status3ds>*<numauto>*<motifrefus>*<originecb>*
/// <bincb>*<hpancb>*<ipclient>*<originetr>*<veres>*<pares>*`
///
/// Twenty-one positional slots joined by `*`. Absent callback fields are
/// already empty strings in [`CallbackFields`], so positions never shift.
pub fn response_chain(config: &Configuration, fields: &CallbackFields) -> String {
    [
        config.tpe.as_str(),
        &fields.date,
        &fields.montant,
        &fields.reference,
        &fields.texte_libre,
        RESPONSE_VERSION,
        &fields.code_retour,
        &fields.cvx,
        &fields.vld,
        &fields.brand,
        &fields.status3ds,
        &fields.numauto,
        &fields.motifrefus,
        &fields.originecb,
        &fields.bincb,
        &fields.hpancb,
        &fields.ipclient,
        &fields.originetr,
        &fields.veres,
        &fields.pares,
        "",
    ]
    .join("*")
}
