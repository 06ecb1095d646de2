use serde::Deserialize;

/// The fields the bank posts back after a payment attempt, under their
/// bit-exact wire names. Every field defaults to the empty string when
/// absent: the response chain is positional, so a missing key must render as
/// an empty slot rather than shift the others or take a different codepath.
#[derive(Debug, Deserialize, PartialEq, Clone, Default)]
pub struct CallbackFields {
    #[serde(rename = "TPE", default)]
    pub tpe: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub montant: String,
    #[serde(default)]
    pub reference: String,
    /// The bank-computed digest this callback is authenticated by.
    #[serde(rename = "MAC", default)]
    pub mac: String,
    #[serde(rename = "texte-libre", default)]
    pub texte_libre: String,
    /// Bank status string: "payetest"/"paiement" on success, "Annulation"
    /// on cancellation. Only meaningful once the MAC has been verified.
    #[serde(rename = "code-retour", default)]
    pub code_retour: String,
    #[serde(default)]
    pub cvx: String,
    #[serde(default)]
    pub vld: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub status3ds: String,
    #[serde(default)]
    pub numauto: String,
    #[serde(default)]
    pub motifrefus: String,
    #[serde(default)]
    pub originecb: String,
    #[serde(default)]
    pub bincb: String,
    #[serde(default)]
    pub hpancb: String,
    #[serde(default)]
    pub ipclient: String,
    #[serde(default)]
    pub originetr: String,
    #[serde(default)]
    pub veres: String,
    #[serde(default)]
    pub pares: String,
    #[serde(default)]
    pub modepaiement: String,
}
