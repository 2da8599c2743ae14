//! Render the pages into the public directory

use anyhow::Result;

use crate::generator::Generator;
use crate::Site;

/// Load post summaries and write every page
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = site.posts()?;
    tracing::info!("Loaded {} posts from {:?}", posts.len(), site.posts_dir);

    let written = Generator::new(site).generate(&posts)?;

    let duration = start.elapsed();
    tracing::info!(
        "Rendered {} pages into {:?} in {:.2}s",
        written.len(),
        site.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}
