//! Places the cities of a country onto its outline and prints the resulting markers.
//!
//! Run with `RUST_LOG=debug` to see the fallbacks taken by the projection.

use serde::Deserialize;
use skyatlas::city::{group_by_region, DEFAULT_REGION};
use skyatlas::placement::{Interaction, MarkerStyle};
use skyatlas::view_box::DEFAULT_PADDING;
use skyatlas::{City, CountryMap, SkyatlasError, WeatherCondition};

#[derive(Deserialize)]
struct Country {
    outline: String,
    cities: Vec<City>,
}

fn main() -> Result<(), SkyatlasError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let country: Country = serde_json::from_str(include_str!("data/japan.json"))?;
    let condition = WeatherCondition::from_description("Light Rain Showers");
    let map = CountryMap::new(&country.outline, country.cities).with_condition(condition);
    log::info!("View box: {}", map.view_box(DEFAULT_PADDING));

    let style = MarkerStyle::from_json(r#"{ "label_char_width": 5.0 }"#)?;
    let interaction = Interaction::none()
        .with_hovered("Osaka")
        .with_selected("Tokyo");

    for marker in map.markers(&style, &interaction) {
        log::info!(
            "#{} {:<10} at ({:>6.1}, {:>6.1}) r={} {} {:?}{}",
            marker.draw_order,
            marker.name,
            marker.position.x,
            marker.position.y,
            marker.radius,
            marker.fill.to_css(),
            marker.emphasis,
            if marker.show_label { " [label]" } else { "" },
        );
    }

    for (region, cities) in group_by_region(map.cities()) {
        let names: Vec<&str> = cities.iter().map(|city| city.name.as_str()).collect();
        let marker = if region == DEFAULT_REGION { "*" } else { "" };
        log::info!("{region}{marker}: {}", names.join(", "));
    }

    let weather = [(61, "Kyoto"), (71, "Sapporo"), (2, "Naha")];
    for (code, name) in weather {
        let condition = WeatherCondition::try_from(code)?;
        log::info!(
            "{name}: {} ({})",
            condition.label(),
            condition.marker_color().to_css()
        );
    }

    Ok(())
}
