//! Synthetic labeled URLs for training. The only source of ground truth:
//! no external dataset is ingested.

use crate::types::{Label, LabeledUrl};
use tracing::info;

const SAFE_URLS: &[&str] = &[
    "http://google.com",
    "https://www.google.com",
    "https://amazon.com",
    "https://apple.com",
    "https://netflix.com",
    "https://wikipedia.org",
    "https://github.com",
    "https://bbc.co.uk",
    "https://sbi.co.in",
    "https://irctc.co.in",
    "https://flipkart.com",
    "https://hdfcbank.com",
];

/// Lookalike domains carrying a known brand name.
const IMPOSTER_URLS: &[&str] = &[
    "http://googlexyx.com",
    "http://googie.com",
    "http://amazon-secure.net",
    "http://apple-id-verify.com",
    "http://netflix-payment-update.xyz",
    "http://sbi-kyc-update.com",
    "http://paytm-cashback-offer.xyz",
    "http://irctc-booking-refund.net",
    "http://flipkart-big-billion-free.com",
    "http://googl-e.com",
    "http://xyx-randomgift.com",
];

/// High-entropy hosts and raw IP literals.
const TECH_MALICIOUS_URLS: &[&str] = &[
    "http://192.168.1.1/login",
    "http://x83-z92.org",
    "http://a1b2c3d4.net",
    "http://secure-login-88.xyz",
];

const SAFE_REPLICATION: usize = 50;
const MALICIOUS_REPLICATION: usize = 30;

/// Three URL groups replicated to training-set size: known-safe branded
/// domains, brand imposters, and high-entropy/IP hosts.
pub fn synthetic_dataset() -> Vec<LabeledUrl> {
    let mut data = Vec::with_capacity(
        SAFE_URLS.len() * SAFE_REPLICATION
            + (IMPOSTER_URLS.len() + TECH_MALICIOUS_URLS.len()) * MALICIOUS_REPLICATION,
    );

    for _ in 0..SAFE_REPLICATION {
        for url in SAFE_URLS {
            data.push(LabeledUrl {
                url: url.to_string(),
                label: Label::Safe,
            });
        }
    }

    for _ in 0..MALICIOUS_REPLICATION {
        for url in IMPOSTER_URLS.iter().chain(TECH_MALICIOUS_URLS) {
            data.push(LabeledUrl {
                url: url.to_string(),
                label: Label::Malicious,
            });
        }
    }

    info!(
        "Generated synthetic training data: {} samples ({} safe, {} malicious)",
        data.len(),
        SAFE_URLS.len() * SAFE_REPLICATION,
        (IMPOSTER_URLS.len() + TECH_MALICIOUS_URLS.len()) * MALICIOUS_REPLICATION,
    );

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_has_expected_category_sizes() {
        let data = synthetic_dataset();
        let safe = data.iter().filter(|d| d.label == Label::Safe).count();
        let malicious = data.iter().filter(|d| d.label == Label::Malicious).count();
        assert_eq!(safe, 12 * 50);
        assert_eq!(malicious, (11 + 4) * 30);
        assert_eq!(data.len(), safe + malicious);
    }

    #[test]
    fn labels_follow_their_source_group() {
        let data = synthetic_dataset();
        assert!(data
            .iter()
            .filter(|d| d.url == "https://www.google.com")
            .all(|d| d.label == Label::Safe));
        assert!(data
            .iter()
            .filter(|d| d.url == "http://sbi-kyc-update.com")
            .all(|d| d.label == Label::Malicious));
    }
}
