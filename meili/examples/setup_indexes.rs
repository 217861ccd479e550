//! One-time index bootstrap: creates the `image_posts` and `comments`
//! indexes and pushes their search settings.

use meili::{IndexSettings, MeiliClient};
use std::collections::HashMap;
use std::env;
use std::error::Error;
use std::time::Duration;

const GERMAN_STOP_WORDS: &[&str] = &[
    "aber", "alle", "als", "also", "am", "an", "auch", "auf", "aus", "bei", "bin", "bis", "das",
    "dass", "dem", "den", "der", "des", "die", "doch", "du", "ein", "eine", "einen", "er", "es",
    "für", "hat", "ich", "im", "in", "ist", "ja", "kann", "mal", "mehr", "mit", "nach", "nicht",
    "noch", "nur", "oder", "schon", "sich", "sie", "sind", "so", "um", "und", "vom", "von", "war",
    "was", "wenn", "wie", "wir", "zu", "zum", "zur",
];

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "he", "in",
    "is", "it", "its", "of", "on", "or", "that", "the", "this", "to", "was", "were", "will",
    "with",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let endpoint =
        env::var("MEILI_ENDPOINT").unwrap_or_else(|_| "http://localhost:7700".to_string());
    let api_key = env::var("MEILI_API_KEY").ok();

    let client = MeiliClient::new(endpoint, api_key)?;

    client.create_index("image_posts", "id").await?;
    client.create_index("comments", "id").await?;

    // Give the instance a moment to register the new indexes before
    // pushing settings.
    tokio::time::sleep(Duration::from_secs(10)).await;

    let synonyms = tag_synonyms();

    client
        .update_settings(
            "image_posts",
            &IndexSettings {
                displayed_attributes: Some(string_vec(&[
                    "id",
                    "author",
                    "thumb_url",
                    "sfw_flag",
                    "promoted",
                    "created_at",
                    "up",
                    "down",
                ])),
                // Author search goes through faceting, not full-text.
                searchable_attributes: Some(string_vec(&["ocr_content", "source"])),
                attributes_for_faceting: Some(string_vec(&[
                    "author",
                    "sfw_flag",
                    "promoted",
                    "extension",
                ])),
                stop_words: Some(stop_words(&[GERMAN_STOP_WORDS, ENGLISH_STOP_WORDS])),
                // Reposts share a thumbnail; collapse them to one hit.
                distinct_attribute: Some("thumb_url".to_string()),
                synonyms: Some(synonyms.clone()),
            },
        )
        .await?;

    client
        .update_settings(
            "comments",
            &IndexSettings {
                displayed_attributes: Some(string_vec(&[
                    "id",
                    "post_id",
                    "author",
                    "created_at",
                    "up",
                    "down",
                ])),
                searchable_attributes: Some(string_vec(&["content"])),
                attributes_for_faceting: Some(string_vec(&["author"])),
                stop_words: Some(stop_words(&[GERMAN_STOP_WORDS])),
                distinct_attribute: None,
                synonyms: Some(synonyms),
            },
        )
        .await?;

    println!("Index setup complete.");
    Ok(())
}

/// Mutual tag associations, e.g. searching "kadse" also matches "katze".
fn tag_synonyms() -> HashMap<String, Vec<String>> {
    let pairs: &[(&str, &[&str])] = &[
        ("pr0", &["pr0gramm"]),
        ("pr0gramm", &["pr0"]),
        ("kadse", &["katze", "schmuser"]),
        ("katze", &["kadse", "schmuser"]),
        ("schmuser", &["kadse", "katze"]),
        ("mieserkadser", &["miesekadser"]),
        ("miesekadser", &["mieserkadser"]),
    ];

    pairs
        .iter()
        .map(|(tag, alternatives)| (tag.to_string(), string_vec(alternatives)))
        .collect()
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn stop_words(lists: &[&[&str]]) -> Vec<String> {
    lists.iter().flat_map(|list| string_vec(list)).collect()
}
