// ABOUTME: Terminal projection of the view tree for the CLI
// ABOUTME: Pure ViewTree-to-String formatting, no display state of its own
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Savora Project

use crate::view::{Panel, ViewTree};
use std::fmt::Write as _;

/// Render the tree as plain text.
#[must_use]
pub fn render(tree: &ViewTree) -> String {
    let mut out = String::new();

    if !tree.title.is_empty() {
        let _ = writeln!(out, "== {} ==", tree.title);
    }
    if let Some(count) = tree.favorites_badge {
        let _ = writeln!(out, "[favorites: {count}]");
    }

    match &tree.panel {
        Panel::Loading => out.push_str("Loading...\n"),
        Panel::Error { message, retryable } => {
            let _ = writeln!(out, "Error: {message}");
            if *retryable {
                out.push_str("(type `retry` to try again)\n");
            }
        }
        Panel::Empty { message } => {
            let _ = writeln!(out, "{message}");
        }
        Panel::Content { cards, has_more } => {
            for card in cards {
                let mark = if card.is_favorite { "*" } else { " " };
                let _ = writeln!(
                    out,
                    "{mark} [{}] {} — {} min · {} servings · {} cal",
                    card.id, card.title, card.time_minutes, card.servings, card.calories
                );
                let _ = writeln!(out, "    {}", card.description);
                if !card.tags.is_empty() {
                    let _ = writeln!(out, "    tags: {}", card.tags.join(", "));
                }
            }
            if *has_more {
                out.push_str("(type `more` to reveal more results)\n");
            }
        }
    }

    if let Some(overlay) = &tree.overlay {
        let _ = writeln!(out, "\n--- {} ({}) ---", overlay.title, overlay.id);
        let _ = writeln!(
            out,
            "{} min · {} servings · {} · {}",
            overlay.time_minutes,
            overlay.servings,
            overlay.difficulty,
            overlay.tags.join(", ")
        );
        let _ = writeln!(out, "image: {}", overlay.image_url);
        out.push_str("\nIngredients:\n");
        for line in &overlay.ingredients {
            let _ = writeln!(out, "  - {line}");
        }
        out.push_str("\nInstructions:\n");
        for (index, step) in overlay.steps.iter().enumerate() {
            let _ = writeln!(out, "  {}. {step}", index + 1);
        }
        let n = overlay.nutrition;
        let _ = writeln!(
            out,
            "\nNutrition (placeholder): {} cal · {}g protein · {}g carbs · {}g fat",
            n.calories, n.protein_g, n.carbs_g, n.fat_g
        );
        if let Some(video) = &overlay.video_url {
            let _ = writeln!(out, "video: {video}");
        }
    }

    if let Some(toast) = &tree.toast {
        let _ = writeln!(
            out,
            "\n>> {} (visible {}s)",
            toast.message,
            toast.duration.as_secs()
        );
    }

    out
}
