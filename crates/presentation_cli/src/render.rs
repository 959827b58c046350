//! Terminal rendering for weather snapshots

use application::Settings;
use domain::entities::WeatherSnapshot;
use domain::value_objects::{WeatherCondition, direction_arrow};

/// Render a snapshot as a multi-line report
#[must_use]
pub fn snapshot(snapshot: &WeatherSnapshot, settings: &Settings, days: usize) -> String {
    let mut out = String::new();
    let forecast = &snapshot.forecast;
    let symbol = settings.unit_system.temperature_symbol();

    out.push_str(&format!(
        "📍 {} ({})\n",
        snapshot.geo,
        snapshot.geo.location
    ));

    let Some(current) = forecast.current() else {
        out.push_str("No forecast data available.\n");
        return out;
    };

    let local = forecast.local_datetime(current.timestamp_utc);
    out.push_str(&format!("🕒 Local time {}\n", local.format("%Y-%m-%d %H:%M")));

    let condition = WeatherCondition::from_owm_code(current.weather_code);
    let label = if current.description.is_empty() {
        condition.description().to_string()
    } else {
        current.description.clone()
    };
    out.push_str(&format!(
        "{} {}, {:.1}{symbol} (feels like {:.1}{symbol})\n",
        condition.emoji(forecast.is_night()),
        label,
        current.temperature,
        current.feels_like,
    ));

    let mut readings = format!(
        "💧 {}%  🔽 {} hPa  💨 {}",
        current.humidity,
        current.pressure,
        settings.wind_speed_unit.format(current.wind_speed),
    );
    if let Some(degrees) = current.wind_direction_degrees {
        readings.push(' ');
        readings.push_str(direction_arrow(degrees));
    }
    readings.push('\n');
    out.push_str(&readings);

    if forecast.sunrise_utc > 0 && forecast.sunset_utc > 0 {
        out.push_str(&format!(
            "🌅 {}  🌇 {}\n",
            forecast.local_datetime(forecast.sunrise_utc).format("%H:%M"),
            forecast.local_datetime(forecast.sunset_utc).format("%H:%M"),
        ));
    }

    if let Some(air) = &snapshot.air_quality {
        out.push_str(&format!("🫁 Air quality {}\n", air.level));
    }

    let summaries = forecast.daily_summaries(days);
    if summaries.len() > 1 {
        out.push_str("📅 Outlook:\n");
        for day in &summaries {
            let condition = WeatherCondition::from_owm_code(day.weather_code);
            out.push_str(&format!(
                "   {}  {}  {:.0}{symbol} … {:.0}{symbol}\n",
                day.date.format("%a %Y-%m-%d"),
                condition.emoji(false),
                day.temperature_min,
                day.temperature_max,
            ));
        }
    }

    out
}

/// Render a numbered place list, most recent first
#[must_use]
pub fn place_list(title: &str, places: &[String]) -> String {
    if places.is_empty() {
        return format!("{title}: none yet.\n");
    }
    let mut out = format!("{title}:\n");
    for (i, place) in places.iter().enumerate() {
        out.push_str(&format!("  {}. {place}\n", i + 1));
    }
    out
}
