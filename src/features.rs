use crate::catalog::{BrandCatalog, KeywordCatalog};
use crate::error::AppError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Dotted-quad pattern with octets in [0,255]. Kept unanchored on purpose:
/// it may match inside a longer digit-dot run (the `1.2.3.4` inside
/// `01.2.3.4` counts as a hit).
const IPV4_PATTERN: &str =
    r"(([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])\.){3}([0-9]|[1-9][0-9]|1[0-9]{2}|2[0-4][0-9]|25[0-5])";

/// Canonical feature order, shared by training and inference.
pub const FEATURE_NAMES: [&str; 8] = [
    "url_length",
    "count_dot",
    "count_hyphen",
    "count_special",
    "entropy",
    "has_ip",
    "brand_impersonation",
    "suspicious_keywords",
];

/// Fixed-schema numeric summary of one URL. Counts and flags are stored as
/// f64 so the record maps straight onto the model's feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlFeatures {
    pub url_length: f64,
    pub count_dot: f64,
    pub count_hyphen: f64,
    pub count_special: f64,
    pub entropy: f64,
    pub has_ip: f64,
    pub brand_impersonation: f64,
    pub suspicious_keywords: f64,
}

impl UrlFeatures {
    /// Values in `FEATURE_NAMES` order.
    pub fn to_vector(&self) -> Vec<f64> {
        vec![
            self.url_length,
            self.count_dot,
            self.count_hyphen,
            self.count_special,
            self.entropy,
            self.has_ip,
            self.brand_impersonation,
            self.suspicious_keywords,
        ]
    }
}

/// Shannon entropy over the 256 possible byte values, in bits per byte.
/// Always within [0, 8]; the empty string is defined as 0.
pub fn shannon_entropy(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let mut counts = [0usize; 256];
    for b in text.bytes() {
        counts[b as usize] += 1;
    }

    let len = text.as_bytes().len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / len;
            -p * p.log2()
        })
        .sum()
}

pub struct FeatureExtractor {
    brands: BrandCatalog,
    keywords: KeywordCatalog,
    ip_pattern: Regex,
}

impl FeatureExtractor {
    pub fn new(brands: BrandCatalog, keywords: KeywordCatalog) -> Result<Self, AppError> {
        Ok(Self {
            brands,
            keywords,
            ip_pattern: Regex::new(IPV4_PATTERN)?,
        })
    }

    /// Assemble the full feature record for one URL. Any string is valid
    /// input; extraction is pure and never fails.
    pub fn extract(&self, url: &str) -> UrlFeatures {
        let url_lower = url.to_lowercase();
        let domain = self.domain_of(url);

        UrlFeatures {
            url_length: url.chars().count() as f64,
            count_dot: url.matches('.').count() as f64,
            count_hyphen: url.matches('-').count() as f64,
            count_special: (url.matches('@').count()
                + url.matches('%').count()
                + url.matches('?').count()) as f64,
            entropy: shannon_entropy(url),
            has_ip: if self.ip_pattern.is_match(url) { 1.0 } else { 0.0 },
            brand_impersonation: self.brand_impersonation(&url_lower, &domain),
            suspicious_keywords: self.keyword_hits(&url_lower),
        }
    }

    /// Authority component (userinfo@host:port) of the URL. Parse failure
    /// or an empty authority degrades to the full raw string rather than
    /// erroring, so every input still yields a match target.
    fn domain_of(&self, url: &str) -> String {
        match Url::parse(url) {
            Ok(parsed) => {
                let authority = parsed.authority();
                if authority.is_empty() {
                    url.to_string()
                } else {
                    authority.to_string()
                }
            }
            Err(_) => url.to_string(),
        }
    }

    /// 1.0 if any catalog brand appears anywhere in the lower-cased URL
    /// while the domain is not exactly one of that brand's official
    /// domains. First matching brand decides; substring matching is not
    /// word-boundary aware, so legitimate pages that merely mention a
    /// brand can be flagged (recall over precision).
    fn brand_impersonation(&self, url_lower: &str, domain: &str) -> f64 {
        for brand in self.brands.brands() {
            if url_lower.contains(brand.as_str()) && !self.brands.is_official(brand, domain) {
                return 1.0;
            }
        }
        0.0
    }

    /// Number of distinct catalog keywords present as substrings. A
    /// keyword occurring more than once still counts once.
    fn keyword_hits(&self, url_lower: &str) -> f64 {
        self.keywords
            .keywords()
            .iter()
            .filter(|k| url_lower.contains(k.as_str()))
            .count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> FeatureExtractor {
        FeatureExtractor::new(BrandCatalog::default(), KeywordCatalog::default())
            .expect("default extractor")
    }

    #[test]
    fn entropy_of_empty_string_is_zero() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn entropy_of_single_repeated_byte_is_zero() {
        assert_eq!(shannon_entropy("aaaaaaaa"), 0.0);
    }

    #[test]
    fn entropy_of_two_equally_likely_bytes_is_one_bit() {
        assert!((shannon_entropy("abab") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn entropy_stays_within_byte_alphabet_bounds() {
        for s in [
            "",
            "a",
            "http://google.com",
            "http://x83-z92.org/a1b2c3d4?q=%41",
            "!@#$%^&*()_+0123456789abcdefghijklmnopqrstuvwxyz",
        ] {
            let h = shannon_entropy(s);
            assert!((0.0..=8.0).contains(&h), "entropy {} out of range for {:?}", h, s);
        }
    }

    #[test]
    fn url_length_matches_input_length() {
        let ex = extractor();
        let url = "http://sbi-kyc-update.com/login?a=1";
        assert_eq!(ex.extract(url).url_length, url.chars().count() as f64);
    }

    #[test]
    fn structural_counts_cover_dots_hyphens_and_specials() {
        let ex = extractor();
        let f = ex.extract("http://a-b.c-d.com/p?x=%41&y=@z");
        assert_eq!(f.count_dot, 2.0);
        assert_eq!(f.count_hyphen, 2.0);
        // one '?', one '%', one '@'
        assert_eq!(f.count_special, 3.0);
    }

    #[test]
    fn detects_ip_literal_host() {
        let ex = extractor();
        assert_eq!(ex.extract("http://192.168.1.1/login").has_ip, 1.0);
        assert_eq!(ex.extract("http://google.com").has_ip, 0.0);
    }

    #[test]
    fn ip_pattern_matches_inside_longer_digit_runs() {
        // Loose by design: "01.2.3.4" contains the valid quad "1.2.3.4".
        let ex = extractor();
        assert_eq!(ex.extract("http://01.2.3.4/").has_ip, 1.0);
    }

    #[test]
    fn ip_pattern_rejects_out_of_range_octets() {
        let ex = extractor();
        assert_eq!(ex.extract("http://999.999.999.999/").has_ip, 0.0);
    }

    #[test]
    fn flags_brand_lookalike_domains() {
        let ex = extractor();
        assert_eq!(ex.extract("http://googlexyx.com").brand_impersonation, 1.0);
        assert_eq!(ex.extract("http://sbi-kyc-update.com").brand_impersonation, 1.0);
    }

    #[test]
    fn official_domains_are_not_flagged() {
        let ex = extractor();
        assert_eq!(ex.extract("https://www.google.com").brand_impersonation, 0.0);
        assert_eq!(ex.extract("https://sbi.co.in").brand_impersonation, 0.0);
    }

    #[test]
    fn brand_in_path_on_foreign_domain_is_flagged() {
        // Known limitation carried over deliberately: a brand mention in
        // the path of an unrelated site trips the flag.
        let ex = extractor();
        assert_eq!(
            ex.extract("https://example.com/blog/google-review").brand_impersonation,
            1.0
        );
    }

    #[test]
    fn unparseable_input_falls_back_to_raw_string_domain() {
        let ex = extractor();
        // No scheme, so authority parsing fails; the raw string is the
        // domain surrogate and cannot equal any official domain.
        assert_eq!(ex.extract("google.com/login").brand_impersonation, 1.0);
        // When the whole input is exactly an official domain, the
        // surrogate matches it and the URL is not flagged.
        assert_eq!(ex.extract("sbi.co.in").brand_impersonation, 0.0);
    }

    #[test]
    fn substitute_catalog_drives_brand_detection() {
        let brands = BrandCatalog::new(
            vec!["acme".to_string()],
            vec![("".to_string(), ".test".to_string())],
        );
        let ex = FeatureExtractor::new(brands, KeywordCatalog::new(vec![]))
            .expect("substitute extractor");
        assert_eq!(ex.extract("http://acme-login.test").brand_impersonation, 1.0);
        assert_eq!(ex.extract("http://acme.test").brand_impersonation, 0.0);
        // Default-catalog brands are unknown to this extractor.
        assert_eq!(ex.extract("http://googlexyx.com").brand_impersonation, 0.0);
    }

    #[test]
    fn keyword_count_is_distinct_per_keyword() {
        let ex = extractor();
        assert_eq!(ex.extract("http://x.com/login").suspicious_keywords, 1.0);
        // Duplicate occurrences of one keyword still count once.
        assert_eq!(ex.extract("http://login.x.com/login").suspicious_keywords, 1.0);
        assert_eq!(
            ex.extract("http://x.com/login-verify-update").suspicious_keywords,
            3.0
        );
    }

    #[test]
    fn adding_a_distinct_keyword_never_decreases_the_count() {
        let ex = extractor();
        let base = ex.extract("http://x.com/login").suspicious_keywords;
        let more = ex.extract("http://x.com/login/verify").suspicious_keywords;
        assert!(more >= base);
    }

    #[test]
    fn extraction_is_idempotent() {
        let ex = extractor();
        let url = "http://paytm-cashback-offer.xyz/login?id=%31";
        assert_eq!(ex.extract(url), ex.extract(url));
    }

    #[test]
    fn vector_order_matches_feature_names() {
        let ex = extractor();
        let f = ex.extract("http://google.com");
        assert_eq!(f.to_vector().len(), FEATURE_NAMES.len());
        assert_eq!(f.to_vector()[0], f.url_length);
        assert_eq!(f.to_vector()[4], f.entropy);
        assert_eq!(f.to_vector()[7], f.suspicious_keywords);
    }
}
