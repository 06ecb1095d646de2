use crate::chain;
use crate::config::Configuration;
use crate::error::PaymentError;
use crate::key;
use crate::request::PaymentRequest;
use crate::signer;

/// Digest that authenticates an outbound payment request.
pub fn request_mac(config: &Configuration, req: &PaymentRequest) -> Result<String, PaymentError> {
    let binary_key = key::derive(&config.hmac_key)?;
    signer::sign(&binary_key, &chain::request_chain(config, req))
}

/// Assembles the fields of the payment form posted to `config.target_url`,
/// under the wire names the bank expects, MAC included. Rendering the form
/// itself is the caller's job.
pub fn build(
    config: &Configuration,
    req: &PaymentRequest,
) -> Result<Vec<(&'static str, String)>, PaymentError> {
    let mac = request_mac(config, req)?;
    let slots = req.installments.chain_slots();
    let [nbrech, dateech1, montantech1, dateech2, montantech2, dateech3, montantech3, dateech4, montantech4] =
        slots;

    Ok(vec![
        ("TPE", config.tpe.clone()),
        ("date", req.formatted_date()),
        ("montant", req.amount.to_string()),
        ("reference", req.reference.clone()),
        ("texte-libre", req.texte_libre.clone()),
        ("version", config.version.clone()),
        ("lgue", req.lgue.clone()),
        ("societe", config.societe.clone()),
        ("mail", req.mail.clone()),
        ("nbrech", nbrech),
        ("dateech1", dateech1),
        ("montantech1", montantech1),
        ("dateech2", dateech2),
        ("montantech2", montantech2),
        ("dateech3", dateech3),
        ("montantech3", montantech3),
        ("dateech4", dateech4),
        ("montantech4", montantech4),
        ("url_retour", config.url_retour.clone()),
        ("url_retour_ok", config.url_retour_ok.clone()),
        ("url_retour_err", config.url_retour_err.clone()),
        ("MAC", mac),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Amount;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn config() -> Configuration {
        Configuration {
            tpe: "012345".into(),
            version: "3.0".into(),
            societe: "monSite1".into(),
            devise: "EUR".into(),
            hmac_key: "9CB2B2CA75A7D8E33A21A8E2E45F2DD7E45A6B2C".into(),
            target_url: "https://p.monetico-services.com/paiement.cgi".into(),
            url_retour: "https://example.com/retour".into(),
            url_retour_ok: "https://example.com/ok".into(),
            url_retour_err: "https://example.com/err".into(),
        }
    }

    fn request() -> PaymentRequest {
        PaymentRequest::new(
            Amount::new(dec!(62.73), "EUR"),
            "ABERTYP00145",
            "ExempleTexteLibre",
            "FR",
            "internaute@sonemail.fr",
        )
        .with_date(
            NaiveDate::from_ymd_opt(2006, 12, 5)
                .unwrap()
                .and_hms_opt(11, 55, 23)
                .unwrap(),
        )
    }

    #[test]
    fn test_request_mac_known_vector() {
        let mac = request_mac(&config(), &request()).unwrap();
        assert_eq!(mac, "8332cac6921f7d50579a3e619e65791b0244ad05");
    }

    #[test]
    fn test_form_carries_wire_names_and_mac() {
        let fields = build(&config(), &request()).unwrap();
        let get = |name: &str| {
            fields
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, v)| v.as_str())
                .unwrap()
        };
        assert_eq!(get("TPE"), "012345");
        assert_eq!(get("montant"), "62.73EUR");
        assert_eq!(get("date"), "05/12/2006:11:55:23");
        assert_eq!(get("texte-libre"), "ExempleTexteLibre");
        assert_eq!(get("nbrech"), "");
        assert_eq!(get("montantech4"), "");
        assert_eq!(get("url_retour_ok"), "https://example.com/ok");
        assert_eq!(get("MAC"), "8332cac6921f7d50579a3e619e65791b0244ad05");
    }

    #[test]
    fn test_form_mac_fails_on_bad_secret() {
        let mut cfg = config();
        cfg.hmac_key = "9CB2B2CA75A7D8E33A21A8E2E45F2DD7E45A6BQ5".into();
        assert!(build(&cfg, &request()).is_err());
    }
}
