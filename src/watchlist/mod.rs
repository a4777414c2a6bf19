//! The static ticker registry.
//!
//! Pure data: ticker symbols with display metadata, defined once at process
//! start and passed into the pipeline as an immutable value. Iteration order
//! is definition order.

/// Display metadata for one watched ticker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickerMeta {
    /// The exchange symbol, unique within a watchlist.
    pub symbol: String,
    /// A human-readable company name.
    pub display_name: String,
    /// The sector the company operates in.
    pub sector: String,
    /// Topical keywords used by the dashboard frontend.
    pub keywords: String,
}

impl TickerMeta {
    /// Creates the metadata for one ticker.
    pub fn new(
        symbol: impl Into<String>,
        display_name: impl Into<String>,
        sector: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            display_name: display_name.into(),
            sector: sector.into(),
            keywords: keywords.into(),
        }
    }
}

/// An ordered, immutable set of watched tickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    tickers: Vec<TickerMeta>,
}

impl Watchlist {
    /// Creates a watchlist from an ordered list of tickers.
    pub fn new(tickers: Vec<TickerMeta>) -> Self {
        Self { tickers }
    }

    /// Iterates the tickers in definition order.
    pub fn iter(&self) -> impl Iterator<Item = &TickerMeta> {
        self.tickers.iter()
    }

    /// Iterates the symbols in definition order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.tickers.iter().map(|t| t.symbol.as_str())
    }

    /// Looks up a ticker by symbol.
    pub fn get(&self, symbol: &str) -> Option<&TickerMeta> {
        self.tickers.iter().find(|t| t.symbol == symbol)
    }

    /// The number of watched tickers.
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    /// Whether the watchlist is empty.
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }
}

impl Default for Watchlist {
    fn default() -> Self {
        let t = TickerMeta::new;
        Self::new(vec![
            t("NVDA", "NVIDIA", "Semiconductors", "AI chips GPU data center earnings"),
            t("AMD", "AMD", "Semiconductors", "CPU GPU AI chips competition"),
            t("MU", "Micron", "Semiconductors", "memory chips DRAM HBM AI"),
            t("SMCI", "Super Micro", "Servers", "AI servers data center rack"),
            t("CENX", "Century Aluminum", "Materials", "aluminum tariffs energy costs"),
            t("WPM", "Wheaton Precious Metals", "Precious Metals", "gold silver streaming royalties"),
            t("ENR.DE", "Siemens Energy", "Energy", "energy transition Europe grid"),
            t("ASME.DE", "ASML", "Semiconductors", "EUV lithography chip manufacturing"),
            t("HT3.DE", "AngloGold Ashanti", "Precious Metals", "gold mining production"),
            t("PTX.DE", "Palantir", "Software", "AI data analytics government contracts"),
            t("NS7.DE", "Northern Star", "Precious Metals", "gold mining Australia production"),
            t("CDM1.DE", "Coeur Mining", "Precious Metals", "silver gold mining operations"),
            t("PA2.DE", "Pan American Silver", "Precious Metals", "silver gold mining Latin America"),
            t("RG3.DE", "Royal Gold", "Precious Metals", "gold royalties streaming"),
            t("USAU", "US Gold Corp", "Precious Metals", "gold exploration mining development"),
            t("APC.DE", "Apple", "Technology", "iPhone supply chain China tariffs"),
            t("ABEC.DE", "Alphabet C", "Technology", "Google AI cloud advertising search"),
            t("ABEA.DE", "Alphabet A", "Technology", "Google AI cloud advertising antitrust"),
            t("AMS1.DE", "American Superconductor", "Technology", "power electronics clean energy grid"),
            t("AP2.DE", "Applied Materials", "Semiconductors", "chip equipment manufacturing semiconductor"),
        ])
    }
}
