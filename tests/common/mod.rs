//! Shared fixtures for integration tests.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use toolrank::Tool;

/// Build a tool with just the four searchable fields set.
pub fn tool(name: &str, handle: &str, category: &str, description: &str) -> Tool {
    Tool {
        name: name.to_string(),
        handle: handle.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        ..Default::default()
    }
}

/// A small but realistic slice of the catalogue.
pub fn sample_tools() -> Vec<Tool> {
    vec![
        tool("LM Arena", "lmarena", "Benchmarks", "Crowdsourced model battles"),
        tool("Ollama", "ollama", "Local Models", "Run LLMs on your own machine"),
        tool("Jan", "jan", "Chat", "Offline-first desktop assistant"),
        tool("Open WebUI", "openwebui", "Chat", "Self-hosted chat frontend"),
        tool("Whisper", "whisper", "Speech", "High quality transcription"),
        tool("ComfyUI", "comfyui", "Image Generation", "Node based diffusion workflows"),
    ]
}
