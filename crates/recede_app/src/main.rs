//! Demo binary: scrolls an intro crawl with the vanishing-point effect
//!
//! Pass a TTF/OTF path as the first argument to override the font;
//! otherwise an installed sans-serif face is used.

use std::path::PathBuf;

use recede_app::{run, EffectConfig};
use recede_text::FontSource;
use tracing_subscriber::EnvFilter;

// Paragraph breaks are literal `\n` tokens consumed by the wrapper.
const INTRO_TEXT: &str = r"Assault Shark
\n \n The year is 2317, and the battleground has spread, not just beneath the waves, but high above in the skies.
\n \n Science's attempts to control nature have led to the creation of the ultimate weapon: bio-engineered creatures designed to fight in the most unforgiving of environments.
\n \n The most feared of them all? You.
\n \n The last surviving free eggheads, guardians of the fading spark of mankind's learning, eke out a precarious survival on near-orbit asteroid stations. To regain Earth, they have plotted a dangerous mission.
\n \n You must return to the skies, and strike down the evil mutant exo-marine jet creatures. Rescue more eggheads, reclaim the ancient fortresses of wisdom, and save Earth for a new age of enlightenment.
\n \n You are the Shark Knight, the last remaining knight of the mystical order: pilots of jet-powered, bio-mechanical shark aircraft, a lethal fusion of oceanic predator and cutting-edge technology. With advanced weaponry, agile jet propulsion, and the instincts of a true apex predator, you are the future's final hope against the plague of evil bio-craft.
\n \n The skies are filled with deadly creatures: mutated squidships, transgenic manta blimps, rocket fish, and other monstrosities, each vying for dominion over the oceans and skies alike. Supported by the artillery of the cryptofacist groundlings, the atmosphere has long been viewed as an impregnable death zone.
\n \n Your mission: fight, survive, and conquer. Only one can rule the skies, and it's time for the world to remember why the Shark is the ultimate predator.
\n \n Out there, they'll fear your bite.
\n \n Welcome to the Assault Shark.
\n \n Prepare for battle.";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let font = match std::env::args().nth(1) {
        Some(path) => FontSource::Path(PathBuf::from(path)),
        None => FontSource::Family("DejaVu Sans".to_string()),
    };

    let mut config = EffectConfig::new(INTRO_TEXT, font);
    config.window_width = 1600;
    config.window_height = 840;
    config.window_title = "Vanishing Point Text Effect".to_string();
    config.start_font_size = 60;
    config.font_color = [255, 255, 0];

    run(config)?;
    Ok(())
}
