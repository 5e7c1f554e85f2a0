/**
 * Blog Seed Tooling
 *
 * Development/demo fixtures for the blog section:
 *
 * - `POST /api/seed-blogs` deletes every existing post and inserts a fixed
 *   batch of synthetically authored event write-ups
 * - `POST /api/fix-blog-images` rewrites every post's image URL from the
 *   cycling image list
 *
 * Both endpoints are destructive-adjacent and require an admin session,
 * like every other mutation.
 */

use axum::{extract::State, Json};
use chrono::{Datelike, Duration, Utc};
use serde::Serialize;
use sqlx::PgPool;

use crate::blog::slug::slugify;
use crate::error::ApiError;
use crate::middleware::auth::AdminSession;
use crate::server::state::AppState;

/// Number of posts the seed batch produces
pub const SEED_BLOG_COUNT: usize = 15;

/// Stock event photography, cycled across seeded posts
const EVENT_IMAGES: [&str; 15] = [
    "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&q=80",
    "https://images.unsplash.com/photo-1511578314322-379afb476865?w=800&q=80",
    "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?w=800&q=80",
    "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?w=800&q=80",
    "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800&q=80",
    "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&q=80",
    "https://images.unsplash.com/photo-1515187029135-18ee286d815b?w=800&q=80",
    "https://images.unsplash.com/photo-1524178232363-1fb2b95b8446?w=800&q=80",
    "https://images.unsplash.com/photo-1517245386807-bb43f82c33c4?w=800&q=80",
    "https://images.unsplash.com/photo-1505373877841-8d25f7d46678?w=800&q=80",
    "https://images.unsplash.com/photo-1511578314322-379afb476865?w=800&q=80",
    "https://images.unsplash.com/photo-1475721027785-f74eccf877e2?w=800&q=80",
    "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800&q=80",
    "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800&q=80",
    "https://images.unsplash.com/photo-1515187029135-18ee286d815b?w=800&q=80",
];

const LONDON_EVENTS: [&str; 8] = [
    "London Tech Week",
    "TechCrunch Disrupt London",
    "London Fintech Summit",
    "AI & Machine Learning Conference",
    "London Startup Showcase",
    "Women in Tech London",
    "London Blockchain Summit",
    "Tech Innovation Forum",
];

const NYC_EVENTS: [&str; 8] = [
    "NYC Tech Summit",
    "New York Fintech Week",
    "TechCrunch Disrupt NYC",
    "NYC Startup Week",
    "Women Who Code NYC",
    "NYC AI Conference",
    "Silicon Alley Tech Meetup",
    "NYC Innovation Summit",
];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Response for the seed endpoint
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub success: bool,
    pub message: String,
    pub blogs: Vec<String>,
}

/// Response for the image backfill endpoint
#[derive(Debug, Serialize)]
pub struct FixImagesResponse {
    pub success: bool,
    pub message: String,
}

/// Per-post wobble on the publishing interval, 0..15 days
///
/// The seed batch only needs to look organic, not be random, so the jitter
/// is a fixed function of the post index and reruns produce the same
/// spacing.
fn day_jitter(index: usize) -> i64 {
    ((index * 13) % 15) as i64
}

/// Generate the templated HTML body for a seeded post
fn generate_content(event_name: &str, city: &str) -> String {
    let (city_name, location, universities, companies) = if city == "London" {
        (
            "London",
            "the heart of London",
            [
                "Imperial College London",
                "University College London",
                "King's College London",
                "London School of Economics",
            ],
            ["Revolut", "Monzo", "Deliveroo", "DeepMind", "Palantir"],
        )
    } else {
        (
            "New York",
            "downtown New York",
            [
                "Columbia University",
                "New York University",
                "Cornell University",
                "Fordham University",
            ],
            ["Goldman Sachs", "JPMorgan Chase", "Spotify", "Etsy", "Bloomberg"],
        )
    };

    format!(
        r#"<h2>Global Internships at {event}</h2>
<p>We're thrilled to share our recent participation in {event}, one of the most exciting tech events in {city}. Our team had an incredible experience connecting with students, industry leaders, and innovative companies throughout the event.</p>

<h3>Event Overview</h3>
<p>{event} brought together thousands of professionals, entrepreneurs, and students from around the world. Held in {location}, the event showcased the latest in artificial intelligence, fintech, and blockchain. Our booth in the main exhibition hall was buzzing from the moment the doors opened.</p>

<h3>Event Highlights</h3>
<p>We met with students from leading universities including {unis}, and many others eager to explore internship opportunities at top tech companies. Some of the key highlights from our participation include:</p>
<ul>
<li>Connecting with over 200 students interested in tech internships across various fields</li>
<li>Networking with representatives from major tech companies including {cos}, and many innovative startups</li>
<li>Hosting three informative sessions about internship opportunities in {city}, each attended by 50+ students</li>
<li>Collecting over 150 contact forms from students interested in our internship matching services</li>
</ul>

<h3>Student Engagement</h3>
<p>One of the most rewarding aspects of the event was meeting so many talented and motivated students. We spoke with computer science majors from {uni_first}, business students, and engineering students looking to gain valuable experience in the tech industry. Many came with well-researched questions about specific companies, internship programs, and career paths, and several shared their personal projects and portfolios with us.</p>

<h3>Industry Connections</h3>
<p>{event} provided an excellent platform to strengthen our relationships with tech companies in {city}. We met hiring managers, talent acquisition teams, and founders actively looking for talented interns. Several companies expressed interest in partnering with Global Internships to provide more internship opportunities, including structured programs, mentorship, and pathways to full-time employment.</p>

<h3>Key Takeaways</h3>
<ul>
<li><strong>Growing Demand:</strong> Companies are expanding their internship programs to attract top talent early.</li>
<li><strong>Diverse Opportunities:</strong> From fintech to AI, from startups to established companies, the range of options keeps widening.</li>
<li><strong>Remote Flexibility:</strong> Many companies now offer hybrid or fully remote internships, opening doors for students regardless of location.</li>
<li><strong>Focus on Skills:</strong> Employers increasingly weigh practical skills and problem-solving over academic credentials alone.</li>
</ul>

<h3>Looking Forward</h3>
<p>As we reflect on {event}, we're excited about the future of internships in {city}. The connections we made will benefit our students for months to come; we're already following up with several companies about specific openings and will share them with our students in the coming weeks.</p>

<p>If you're a student interested in tech internships in {city}, reach out to us. Whether you're into software development, data science, product management, or cybersecurity, our team can help you navigate the internship landscape and find the opportunity that matches your goals.</p>

<h3>Conclusion</h3>
<p>{event} was a tremendous success for Global Internships. We're grateful for the opportunity to connect with so many talented students and innovative companies, and we look forward to helping more of them launch their careers through exceptional internship experiences. Stay tuned for more updates from our team!</p>"#,
        event = event_name,
        city = city_name,
        location = location,
        unis = universities.join(", "),
        cos = companies.join(", "),
        uni_first = universities[0],
    )
}

/// Replace all blog rows with a freshly generated seed batch
///
/// Destructive: every existing post is deleted first. Inserts exactly
/// `SEED_BLOG_COUNT` posts with unique index-suffixed slugs and published
/// dates spaced 35-50 days apart going backward from now. Returns the
/// inserted titles.
pub async fn seed_blogs(pool: &PgPool) -> Result<Vec<String>, ApiError> {
    sqlx::query("DELETE FROM blogs").execute(pool).await?;

    let today = Utc::now();
    let mut titles = Vec::with_capacity(SEED_BLOG_COUNT);

    for i in 0..SEED_BLOG_COUNT {
        let days_ago = (i as i64 + 1) * 35 + day_jitter(i);
        let published_date = today - Duration::days(days_ago);

        let city = if i % 2 == 0 { "London" } else { "New York" };
        let events = if city == "London" {
            &LONDON_EVENTS
        } else {
            &NYC_EVENTS
        };
        let event_name = events[i % events.len()];

        let month_name = MONTH_NAMES[published_date.month0() as usize];
        let title = format!(
            "Global Internships at {} {} {}",
            event_name,
            month_name,
            published_date.year()
        );
        // Index suffix keeps slugs unique even when event names repeat
        let slug = format!("{}-{}", slugify(&title), i + 1);
        let content = generate_content(event_name, city);
        let excerpt = format!(
            "Our team recently participated in {}, connecting with students and tech companies in {}. \
             Read about our experience and the exciting opportunities we discovered.",
            event_name, city
        );
        let image_url = EVENT_IMAGES[i % EVENT_IMAGES.len()];

        sqlx::query(
            r#"
            INSERT INTO blogs (title, slug, content, excerpt, image_url, published_date)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&title)
        .bind(&slug)
        .bind(&content)
        .bind(&excerpt)
        .bind(image_url)
        .bind(published_date)
        .execute(pool)
        .await?;

        titles.push(title);
    }

    Ok(titles)
}

/// Rewrite every post's image URL from the cycling image list
///
/// Returns the number of rows updated.
pub async fn backfill_images(pool: &PgPool) -> Result<u64, ApiError> {
    let ids: Vec<i32> = sqlx::query_scalar("SELECT id FROM blogs ORDER BY id")
        .fetch_all(pool)
        .await?;

    for (i, id) in ids.iter().enumerate() {
        let image_url = EVENT_IMAGES[i % EVENT_IMAGES.len()];
        sqlx::query("UPDATE blogs SET image_url = $1 WHERE id = $2")
            .bind(image_url)
            .bind(id)
            .execute(pool)
            .await?;
    }

    Ok(ids.len() as u64)
}

/// Handler for POST /api/seed-blogs (admin only)
pub async fn seed_blogs_handler(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<SeedResponse>, ApiError> {
    let titles = seed_blogs(&state.pool).await?;
    tracing::info!("Seeded {} blogs", titles.len());

    Ok(Json(SeedResponse {
        success: true,
        message: format!("Successfully seeded {} blogs!", titles.len()),
        blogs: titles,
    }))
}

/// Handler for POST /api/fix-blog-images (admin only)
pub async fn fix_blog_images_handler(
    _session: AdminSession,
    State(state): State<AppState>,
) -> Result<Json<FixImagesResponse>, ApiError> {
    let updated = backfill_images(&state.pool).await?;
    tracing::info!("Backfilled images for {} blogs", updated);

    Ok(Json(FixImagesResponse {
        success: true,
        message: format!("Updated images for {} blogs", updated),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::slug::slugify;
    use std::collections::HashSet;

    #[test]
    fn test_day_jitter_range() {
        for i in 0..SEED_BLOG_COUNT {
            let jitter = day_jitter(i);
            assert!((0..15).contains(&jitter), "jitter {} out of range", jitter);
        }
    }

    #[test]
    fn test_generate_content_mentions_event_and_city() {
        let content = generate_content("London Tech Week", "London");
        assert!(content.contains("London Tech Week"));
        assert!(content.contains("Imperial College London"));
        assert!(content.contains("<h2>"));

        let content = generate_content("NYC Tech Summit", "New York");
        assert!(content.contains("downtown New York"));
        assert!(content.contains("Goldman Sachs"));
    }

    #[test]
    fn test_seed_slugs_are_unique() {
        // Mirror the slug derivation of the seed loop; the index suffix must
        // keep slugs unique even when event names repeat across the batch.
        let mut slugs = HashSet::new();
        for i in 0..SEED_BLOG_COUNT {
            let city = if i % 2 == 0 { "London" } else { "New York" };
            let events = if city == "London" {
                &LONDON_EVENTS
            } else {
                &NYC_EVENTS
            };
            let title = format!("Global Internships at {} June 2024", events[i % events.len()]);
            let slug = format!("{}-{}", slugify(&title), i + 1);
            assert!(slugs.insert(slug));
        }
        assert_eq!(slugs.len(), SEED_BLOG_COUNT);
    }
}
