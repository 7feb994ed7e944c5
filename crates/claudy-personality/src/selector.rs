//! Priority-ranked comment selection with anti-repetition memory

use crate::base::{CommentCategory, CommentSelection};
use crate::config::SelectorConfig;
use crate::registry::CategoryRegistry;
use claudy_core::random::{self, RandomSource};
use claudy_core::Context;
use std::collections::VecDeque;

/// Chooses the remark shown in the speech bubble for a context
pub struct CommentSelector {
    config: SelectorConfig,
    registry: CategoryRegistry,
    random: Box<dyn RandomSource>,
    last_comment: Option<String>,
    recent: VecDeque<String>,
}

impl CommentSelector {
    /// Built-in catalog with OS-seeded randomness
    pub fn new(config: SelectorConfig) -> Self {
        Self::with_parts(config, CategoryRegistry::with_defaults(), random::from_entropy())
    }

    pub fn with_random(config: SelectorConfig, random: Box<dyn RandomSource>) -> Self {
        Self::with_parts(config, CategoryRegistry::with_defaults(), random)
    }

    pub fn with_parts(
        config: SelectorConfig,
        registry: CategoryRegistry,
        random: Box<dyn RandomSource>,
    ) -> Self {
        let mut selector = Self {
            config: SelectorConfig::new(),
            registry,
            random,
            last_comment: None,
            recent: VecDeque::new(),
        };
        selector.set_config(config);
        selector
    }

    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Replace the configuration; unknown disabled names are logged and skipped
    pub fn set_config(&mut self, config: SelectorConfig) {
        self.registry.enable_all();
        for name in &config.disabled_categories {
            if let Err(err) = self.registry.disable(name) {
                tracing::warn!("{}", err);
            }
        }
        self.config = config;
        while self.recent.len() > self.config.recent_capacity {
            self.recent.pop_front();
        }
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn register(&mut self, category: Box<dyn CommentCategory>) {
        self.registry.register(category);
    }

    /// Remark for `ctx`, or `None` when the throttle skips it or nothing matches
    pub fn select(&mut self, ctx: &Context) -> Option<String> {
        if self.random.next_f64() > self.config.comment_chance {
            return None;
        }

        let candidates = self.candidates(ctx);
        let top = candidates.iter().map(|c| c.priority).max()?;
        let best: Vec<&CommentSelection> =
            candidates.iter().filter(|c| c.priority == top).collect();
        let mut chosen = best[self.random.pick(best.len())];

        if self.recent.contains(&chosen.text) {
            let alternatives: Vec<&CommentSelection> =
                candidates.iter().filter(|c| c.text != chosen.text).collect();
            if !alternatives.is_empty() {
                chosen = alternatives[self.random.pick(alternatives.len())];
            }
        }

        tracing::debug!(
            category = %chosen.category,
            priority = chosen.priority,
            "comment selected"
        );
        let text = chosen.text.clone();
        self.record(&text);
        Some(text)
    }

    /// Every enabled candidate at or above the priority floor
    fn candidates(&self, ctx: &Context) -> Vec<CommentSelection> {
        let mut found = Vec::new();
        for category in self.registry.active() {
            if !category.matches(ctx) {
                continue;
            }
            for comment in category.comments(ctx) {
                if comment.priority >= self.config.min_priority {
                    found.push(CommentSelection {
                        text: comment.text,
                        category: category.name().to_string(),
                        priority: comment.priority,
                    });
                }
            }
        }
        found
    }

    fn record(&mut self, text: &str) {
        self.last_comment = Some(text.to_string());
        if !self.recent.iter().any(|t| t == text) {
            self.recent.push_back(text.to_string());
        }
        while self.recent.len() > self.config.recent_capacity {
            self.recent.pop_front();
        }
    }

    pub fn last_comment(&self) -> Option<&str> {
        self.last_comment.as_deref()
    }

    /// Recently shown remarks, oldest first
    pub fn recent(&self) -> impl Iterator<Item = &str> {
        self.recent.iter().map(String::as_str)
    }

    pub fn reset(&mut self) {
        self.last_comment = None;
        self.recent.clear();
    }
}
