//! Static site content: the two apartments and their "from" prices.

use rust_decimal::Decimal;

use crate::i18n::Language;
use crate::pricing::{round_whole, PricingConfig};

/// One apartment card on the home page
#[derive(Debug, Clone)]
pub struct Room {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub features: Vec<&'static str>,
    pub amenities: Vec<&'static str>,
    /// e.g. `€56`
    pub from_price: String,
}

/// Cheapest night the configuration can produce over the year.
pub fn lowest_nightly_rate(config: &PricingConfig) -> Decimal {
    let lowest_multiplier = (1..=12)
        .map(|month| config.multiplier(month))
        .min()
        .unwrap_or(Decimal::ONE);
    round_whole(config.lowest_base_rate() * lowest_multiplier)
}

pub fn rooms(language: Language, config: &PricingConfig) -> Vec<Room> {
    let t = language.strings();
    let from_price = format!("€{}", lowest_nightly_rate(config).normalize());

    vec![
        Room {
            name: t.sea_view,
            description: t.sea_view_description,
            image: "/static/images/room-sea-view.jpg",
            features: vec!["35 m²", "King bed", "Terrace"],
            amenities: vec![t.free_wifi, t.air_conditioning, t.welcome_amenities],
            from_price: from_price.clone(),
        },
        Room {
            name: t.family_suite,
            description: t.family_description,
            image: "/static/images/room-family.jpg",
            features: vec!["50 m²", "2 bedrooms", "Living area"],
            amenities: vec![t.free_wifi, t.air_conditioning, t.free_parking],
            from_price,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_lowest_rate_uses_cheapest_month() {
        // weekday 80 * 0.7
        assert_eq!(lowest_nightly_rate(&PricingConfig::default()), dec!(56));
    }

    #[test]
    fn test_lowest_rate_without_multipliers() {
        let config = PricingConfig {
            monthly_multipliers: Default::default(),
            ..PricingConfig::default()
        };
        assert_eq!(lowest_nightly_rate(&config), dec!(80));
    }

    #[test]
    fn test_rooms_are_localized() {
        let rooms = rooms(Language::It, &PricingConfig::default());
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms[0].name, "Suite Vista Mare");
        assert_eq!(rooms[1].from_price, "€56");
    }
}
