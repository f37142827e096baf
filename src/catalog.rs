//! Static card catalog
//!
//! The list of known Indian credit and debit cards offered by the selector.
//! Order here is display order.

use std::fmt;

/// Instrument type of a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardType {
    Credit,
    Debit,
}

impl CardType {
    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Credit => "Credit",
            CardType::Debit => "Debit",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A known payment instrument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardEntry {
    pub name: &'static str,
    pub bank: &'static str,
    pub card_type: CardType,
}

impl CardEntry {
    const fn credit(name: &'static str, bank: &'static str) -> Self {
        Self {
            name,
            bank,
            card_type: CardType::Credit,
        }
    }

    const fn debit(name: &'static str, bank: &'static str) -> Self {
        Self {
            name,
            bank,
            card_type: CardType::Debit,
        }
    }

    /// Secondary line shown under the card name, e.g. `HDFC • Credit`
    pub fn meta(&self) -> String {
        format!("{} • {}", self.bank, self.card_type)
    }

    /// Case-insensitive substring match on name or issuer.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.bank.to_lowercase().contains(needle)
    }
}

pub static CATALOG: &[CardEntry] = &[
    // HDFC Bank
    CardEntry::credit("HDFC Regalia", "HDFC"),
    CardEntry::credit("HDFC Diners Club Black", "HDFC"),
    CardEntry::credit("HDFC Infinia", "HDFC"),
    CardEntry::credit("HDFC MoneyBack", "HDFC"),
    CardEntry::credit("HDFC Millennia", "HDFC"),
    CardEntry::credit("HDFC Freedom", "HDFC"),
    CardEntry::debit("HDFC Platinum Debit Card", "HDFC"),
    // ICICI Bank
    CardEntry::credit("ICICI Amazon Pay", "ICICI"),
    CardEntry::credit("ICICI Sapphiro", "ICICI"),
    CardEntry::credit("ICICI Coral", "ICICI"),
    CardEntry::credit("ICICI Rubyx", "ICICI"),
    CardEntry::credit("ICICI Platinum", "ICICI"),
    CardEntry::credit("ICICI Emeralde", "ICICI"),
    // SBI
    CardEntry::credit("SBI Card Elite", "SBI"),
    CardEntry::credit("SBI Card Prime", "SBI"),
    CardEntry::credit("SBI SimplyCLICK", "SBI"),
    CardEntry::credit("SBI SimplySAVE", "SBI"),
    CardEntry::debit("SBI Platinum Debit Card", "SBI"),
    // Axis Bank
    CardEntry::credit("Axis Magnus", "Axis"),
    CardEntry::credit("Axis Reserve", "Axis"),
    CardEntry::credit("Axis Vistara", "Axis"),
    CardEntry::credit("Axis Flipkart", "Axis"),
    CardEntry::credit("Axis Ace", "Axis"),
    CardEntry::credit("Axis Neo", "Axis"),
    // American Express
    CardEntry::credit("Amex Platinum Card", "Amex"),
    CardEntry::credit("Amex Gold Card", "Amex"),
    CardEntry::credit("Amex Membership Rewards", "Amex"),
    CardEntry::credit("Amex SmartEarn", "Amex"),
    // Citibank
    CardEntry::credit("Citi Prestige", "Citi"),
    CardEntry::credit("Citi PremierMiles", "Citi"),
    CardEntry::credit("Citi Rewards", "Citi"),
    CardEntry::credit("Citi Cashback", "Citi"),
    // Standard Chartered
    CardEntry::credit("SC Ultimate", "Standard Chartered"),
    CardEntry::credit("SC DigiSmart", "Standard Chartered"),
    CardEntry::credit("SC Platinum Rewards", "Standard Chartered"),
    // Kotak Mahindra
    CardEntry::credit("Kotak Royale Signature", "Kotak"),
    CardEntry::credit("Kotak Zen", "Kotak"),
    CardEntry::credit("Kotak League Platinum", "Kotak"),
    // Yes Bank
    CardEntry::credit("Yes First Exclusive", "Yes Bank"),
    CardEntry::credit("Yes Prosperity Rewards Plus", "Yes Bank"),
    // IndusInd Bank
    CardEntry::credit("IndusInd Legend", "IndusInd"),
    CardEntry::credit("IndusInd Pinnacle", "IndusInd"),
    CardEntry::credit("IndusInd Iconia", "IndusInd"),
    // RBL Bank
    CardEntry::credit("RBL Bank World Safari", "RBL"),
    CardEntry::credit("RBL Bank Shoprite", "RBL"),
    // AU Small Finance Bank
    CardEntry::credit("AU Altura Plus", "AU Bank"),
    CardEntry::credit("AU Zenith", "AU Bank"),
];

/// Look up a catalog entry by exact name
pub fn find(name: &str) -> Option<&'static CardEntry> {
    CATALOG.iter().find(|card| card.name == name)
}
