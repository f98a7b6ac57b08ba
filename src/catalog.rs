//! Static detection catalogs: spoofed-brand names and phishing keywords.
//!
//! Both catalogs are plain data handed to the extractor at construction
//! time, so tests can substitute smaller lists.

/// High-value brand names frequently spoofed in phishing campaigns,
/// global and Indian context.
const TARGET_BRANDS: &[&str] = &[
    // Global tech & social
    "google", "amazon", "apple", "facebook", "netflix", "paypal", "microsoft",
    "instagram", "whatsapp", "linkedin", "twitter", "tiktok", "adobe",
    "dropbox", "zoom", "slack", "shopify", "spotify", "reddit", "pinterest",
    "snapchat", "telegram", "yahoo", "bing", "ebay",
    // Banking & finance
    "chase", "wellsfargo", "citi", "hsbc", "barclays", "coinbase", "binance",
    "kraken", "mastercard", "visa",
    // Indian critical infrastructure
    "sbi", "hdfc", "icici", "axis", "paytm", "phonepe", "razorpay",
    "flipkart", "zomato", "swiggy", "irctc", "indiapost",
    // Logistics & utilities
    "dhl", "fedex", "ups", "usps", "bluedart", "delhivery", "maersk",
];

/// (prefix, suffix) pairs a brand's official domains are generated from.
const OFFICIAL_DOMAIN_PATTERNS: &[(&str, &str)] = &[
    ("", ".com"),
    ("www.", ".com"),
    ("", ".co.in"),
    ("www.", ".co.in"),
    ("", ".org"),
    ("", ".net"),
    ("", ".io"),
];

const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "login", "verify", "update", "secure", "gift", "bonus", "free", "signin",
    "bank", "alert", "account",
];

#[derive(Debug, Clone)]
pub struct BrandCatalog {
    brands: Vec<String>,
    domain_patterns: Vec<(String, String)>,
}

impl BrandCatalog {
    pub fn new(brands: Vec<String>, domain_patterns: Vec<(String, String)>) -> Self {
        Self {
            brands,
            domain_patterns,
        }
    }

    pub fn brands(&self) -> &[String] {
        &self.brands
    }

    /// Official domain strings for one brand, one per pattern.
    pub fn official_domains(&self, brand: &str) -> Vec<String> {
        self.domain_patterns
            .iter()
            .map(|(prefix, suffix)| format!("{}{}{}", prefix, brand, suffix))
            .collect()
    }

    /// Exact string equality against the generated official set. No
    /// subdomain or path awareness.
    pub fn is_official(&self, brand: &str, domain: &str) -> bool {
        self.domain_patterns
            .iter()
            .any(|(prefix, suffix)| domain == format!("{}{}{}", prefix, brand, suffix))
    }
}

impl Default for BrandCatalog {
    fn default() -> Self {
        Self::new(
            TARGET_BRANDS.iter().map(|b| b.to_string()).collect(),
            OFFICIAL_DOMAIN_PATTERNS
                .iter()
                .map(|(p, s)| (p.to_string(), s.to_string()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct KeywordCatalog {
    keywords: Vec<String>,
}

impl KeywordCatalog {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::new(SUSPICIOUS_KEYWORDS.iter().map(|k| k.to_string()).collect())
    }
}
