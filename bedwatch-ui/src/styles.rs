#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Node};

const STYLE_TAG_SELECTOR: &str = "style[data-bedwatch-ui]";

/// Default CSS for the screen along with easy-to-override design tokens.
pub const DEFAULT_STYLES: &str = r#"
:root {
  --bedwatch-font-family: 'Inter', system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
  --bedwatch-bg: #f5f8fc;
  --bedwatch-card-bg: #ffffff;
  --bedwatch-card-border: rgba(148, 163, 184, 0.28);
  --bedwatch-radius: 12px;
  --bedwatch-text: #1f2933;
  --bedwatch-muted: #52606d;
  --bedwatch-primary: #0f6cbd;
  --bedwatch-primary-text: #ffffff;
  --bedwatch-status-available: #22c55e;
  --bedwatch-status-limited: #f59e0b;
  --bedwatch-status-full: #ef4444;
  --bedwatch-user-marker: #3b82f6;
}

.bedwatch-root {
  font-family: var(--bedwatch-font-family);
  background: var(--bedwatch-bg);
  color: var(--bedwatch-text);
  min-height: 100vh;
}

.bedwatch-hero {
  background: var(--bedwatch-primary);
  color: var(--bedwatch-primary-text);
  padding: 32px 24px;
}

.bedwatch-hero h1 {
  margin: 0 0 6px;
  font-size: 2.2rem;
}

.bedwatch-hero p {
  margin: 0;
  opacity: 0.9;
}

.bedwatch-toolbar {
  max-width: 1200px;
  margin: 24px auto;
  padding: 20px;
  background: var(--bedwatch-card-bg);
  border-radius: var(--bedwatch-radius);
  box-shadow: 0 12px 32px rgba(15, 23, 42, 0.08);
  display: flex;
  flex-direction: column;
  gap: 12px;
}

.toolbar-row {
  display: flex;
  gap: 12px;
  flex-wrap: wrap;
}

.toolbar-row input[type="search"] {
  flex: 1;
  min-width: 240px;
  height: 44px;
  padding: 0 14px;
  border: 1px solid var(--bedwatch-card-border);
  border-radius: 8px;
  font-size: 1rem;
}

.bedwatch-button {
  position: relative;
  height: 44px;
  padding: 0 16px;
  border-radius: 8px;
  border: 1px solid var(--bedwatch-card-border);
  background: var(--bedwatch-card-bg);
  cursor: pointer;
}

.bedwatch-button.is-primary {
  background: var(--bedwatch-primary);
  color: var(--bedwatch-primary-text);
  border-color: transparent;
  width: 100%;
}

.bedwatch-button:disabled {
  opacity: 0.55;
  cursor: not-allowed;
}

.filter-count {
  position: absolute;
  top: -8px;
  right: -8px;
  width: 20px;
  height: 20px;
  border-radius: 50%;
  background: var(--bedwatch-primary);
  color: var(--bedwatch-primary-text);
  font-size: 0.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
}

.result-summary {
  color: var(--bedwatch-muted);
  font-size: 0.9rem;
}

.filter-panel {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
  gap: 18px;
  padding-top: 12px;
  border-top: 1px solid var(--bedwatch-card-border);
}

.filter-panel h3 {
  margin: 0 0 8px;
  font-size: 0.9rem;
}

.filter-panel label {
  display: flex;
  gap: 8px;
  align-items: center;
  font-size: 0.9rem;
  padding: 3px 0;
  cursor: pointer;
}

.bedwatch-tabs {
  display: flex;
  justify-content: center;
  gap: 6px;
  margin-bottom: 16px;
}

.bedwatch-tabs button.is-active {
  background: var(--bedwatch-primary);
  color: var(--bedwatch-primary-text);
}

.bedwatch-content {
  max-width: 1200px;
  margin: 0 auto;
  padding: 0 20px 32px;
}

.hospital-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
  gap: 16px;
}

.hospital-card {
  background: var(--bedwatch-card-bg);
  border: 2px solid var(--bedwatch-card-border);
  border-radius: var(--bedwatch-radius);
  padding: 16px;
  cursor: pointer;
  transition: box-shadow 0.3s, border-color 0.3s;
}

.hospital-card:hover {
  border-color: var(--bedwatch-primary);
  box-shadow: 0 10px 24px rgba(15, 23, 42, 0.12);
}

.card-header {
  display: flex;
  justify-content: space-between;
  gap: 8px;
  align-items: flex-start;
}

.card-header h3 {
  margin: 0;
  font-size: 1.1rem;
}

.card-address {
  color: var(--bedwatch-muted);
  font-size: 0.875rem;
}

.card-vacant {
  font-weight: 600;
}

.tag-row {
  display: flex;
  gap: 6px;
  flex-wrap: wrap;
}

.tag {
  border: 1px solid var(--bedwatch-card-border);
  border-radius: 999px;
  padding: 2px 10px;
  font-size: 0.75rem;
}

.status-badge {
  color: #ffffff;
  border-radius: 999px;
  padding: 3px 10px;
  font-size: 0.75rem;
  font-weight: 600;
  white-space: nowrap;
}

.status-badge[data-status="available"] { background: var(--bedwatch-status-available); }
.status-badge[data-status="limited"] { background: var(--bedwatch-status-limited); }
.status-badge[data-status="full"] { background: var(--bedwatch-status-full); }

.bedwatch-empty {
  text-align: center;
  padding: 48px 0;
  color: var(--bedwatch-muted);
  background: var(--bedwatch-card-bg);
  border-radius: var(--bedwatch-radius);
}

.detail-backdrop {
  position: fixed;
  inset: 0;
  background: rgba(15, 23, 42, 0.45);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 20;
}

.detail-dialog {
  background: var(--bedwatch-card-bg);
  border-radius: var(--bedwatch-radius);
  width: min(680px, 94vw);
  max-height: 90vh;
  overflow-y: auto;
  padding: 24px;
  display: flex;
  flex-direction: column;
  gap: 16px;
}

.detail-summary {
  display: flex;
  justify-content: space-between;
  background: rgba(15, 108, 189, 0.06);
  border-radius: 10px;
  padding: 16px;
}

.detail-summary strong {
  display: block;
  font-size: 1.8rem;
}

.breakdown-row {
  display: flex;
  justify-content: space-between;
  padding: 10px 12px;
  background: rgba(148, 163, 184, 0.12);
  border-radius: 8px;
  margin-bottom: 8px;
}

.detail-hint {
  text-align: center;
  color: var(--bedwatch-muted);
  font-size: 0.875rem;
}

.map-frame {
  position: relative;
  height: 600px;
  background: var(--bedwatch-card-bg);
  border-radius: var(--bedwatch-radius);
  overflow: hidden;
}

.map-frame svg {
  width: 100%;
  height: 100%;
  background: #e8eef5;
}

.map-marker {
  stroke: #ffffff;
  stroke-width: 3;
  cursor: pointer;
}

.map-legend {
  position: absolute;
  top: 16px;
  left: 16px;
  background: rgba(255, 255, 255, 0.95);
  border-radius: 8px;
  padding: 10px 12px;
  font-size: 0.85rem;
}

.legend-dot {
  display: inline-block;
  width: 14px;
  height: 14px;
  border-radius: 50%;
  margin-right: 8px;
  vertical-align: middle;
}

.map-setup {
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
}

.map-setup form {
  max-width: 420px;
  display: flex;
  flex-direction: column;
  gap: 10px;
  text-align: center;
}

.map-setup input {
  height: 40px;
  padding: 0 12px;
  font-family: monospace;
}

.bedwatch-toast {
  position: fixed;
  right: 24px;
  bottom: 24px;
  max-width: 360px;
  background: var(--bedwatch-card-bg);
  border-radius: 10px;
  box-shadow: 0 12px 32px rgba(15, 23, 42, 0.2);
  padding: 14px 16px;
  z-index: 30;
}

.bedwatch-toast h4 {
  margin: 0 0 4px;
}

@media (max-width: 640px) {
  .bedwatch-hero h1 {
    font-size: 1.6rem;
  }

  .toolbar-row {
    flex-direction: column;
  }

  .hospital-grid {
    grid-template-columns: 1fr;
  }
}
"#;

pub fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.query_selector(STYLE_TAG_SELECTOR)?.is_some() {
        return Ok(());
    }

    let head = document
        .head()
        .ok_or_else(|| JsValue::from_str("Document has no <head> element"))?;

    let style_el = document.create_element("style")?;
    style_el.set_attribute("data-bedwatch-ui", "v1")?;
    style_el.set_text_content(Some(DEFAULT_STYLES));
    head.append_child(&style_el.clone().dyn_into::<Node>()?)?;

    Ok(())
}
