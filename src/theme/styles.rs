//! Global CSS styles for Card Forge.
//!
//! Dark studio backdrop with element-tinted cards. The card root carries a
//! `data-element` attribute; the per-element rules at the bottom key off it.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backdrop */
  --ink-black: #0c0c10;
  --ink-lighter: #14141c;
  --ink-border: #24242e;

  /* Accents */
  --ember: #f0a35e;
  --ember-glow: rgba(240, 163, 94, 0.35);

  /* Text */
  --text-primary: #f2f2f2;
  --text-secondary: rgba(242, 242, 242, 0.7);
  --text-muted: rgba(242, 242, 242, 0.45);

  /* Semantic */
  --danger: #ff3b5c;

  /* Card element accent, overridden per data-element below */
  --element-accent: #8a8a96;
  --element-tint: rgba(138, 138, 150, 0.18);

  /* Typography */
  --font-serif: Georgia, 'Times New Roman', serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-mono);
  background: var(--ink-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Studio Layout === */
.studio {
  max-width: 1080px;
  margin: 0 auto;
  padding: 2rem 1.5rem 3rem;
}

.studio-header {
  text-align: center;
  margin-bottom: 2rem;
}

.page-title {
  font-family: var(--font-serif);
  font-size: 2.5rem;
  font-weight: 400;
  color: var(--ember);
  text-shadow: 0 0 30px var(--ember-glow);
  letter-spacing: 0.08em;
}

.tagline {
  color: var(--text-muted);
  font-size: 0.875rem;
  margin-top: 0.25rem;
}

.studio-layout {
  display: grid;
  grid-template-columns: minmax(280px, 380px) 1fr;
  gap: 2rem;
  align-items: start;
}

/* === Form === */
.form-panel {
  background: var(--ink-lighter);
  border: 1px solid var(--ink-border);
  border-radius: 12px;
  padding: 1.5rem;
}

.card-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-label {
  display: block;
  font-size: 0.75rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-secondary);
  margin-bottom: 0.35rem;
}

.input-field {
  width: 100%;
  font-family: var(--font-mono);
  font-size: 0.9375rem;
  color: var(--text-primary);
  background: var(--ink-black);
  border: 1px solid var(--ink-border);
  border-radius: 8px;
  padding: 0.6rem 0.75rem;
  outline: none;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  border-color: var(--ember);
}

textarea.input-field {
  resize: vertical;
}

/* === Generate Button === */
.btn-generate {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.6rem;
  font-family: var(--font-mono);
  font-size: 1rem;
  color: var(--ink-black);
  background: var(--ember);
  border: none;
  border-radius: 8px;
  padding: 0.75rem 1rem;
  margin-top: 0.5rem;
  cursor: pointer;
  transition: filter var(--transition-fast);
}

.btn-generate:hover:not(:disabled) {
  filter: brightness(1.1);
}

.btn-generate:disabled {
  cursor: wait;
  opacity: 0.7;
}

.btn-generate__loader {
  width: 14px;
  height: 14px;
  border-radius: 50%;
  border: 2px solid rgba(12, 12, 16, 0.3);
  border-top-color: var(--ink-black);
  animation: spin 700ms linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Card Placeholder === */
.card-placeholder {
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  min-height: 420px;
  border: 2px dashed var(--ink-border);
  border-radius: 16px;
  color: var(--text-muted);
}

.card-placeholder__glyph {
  font-size: 2.5rem;
  opacity: 0.6;
}

/* === Creature Card === */
.creature-card {
  position: relative;
  max-width: 420px;
  margin: 0 auto;
  background: linear-gradient(160deg, var(--element-tint), var(--ink-lighter) 55%);
  border: 2px solid var(--element-accent);
  border-radius: 16px;
  padding: 1.25rem;
  animation: card-enter 450ms cubic-bezier(0.2, 0.8, 0.3, 1);
}

@keyframes card-enter {
  from {
    opacity: 0;
    transform: translateY(18px) scale(0.97);
  }
  to {
    opacity: 1;
    transform: translateY(0) scale(1);
  }
}

.creature-card__header {
  display: flex;
  align-items: baseline;
  gap: 0.75rem;
  margin-bottom: 0.75rem;
}

.creature-card__name {
  font-family: var(--font-serif);
  font-size: 1.5rem;
  font-weight: 600;
  flex: 1;
  overflow-wrap: anywhere;
}

.creature-card__hp {
  font-size: 1.125rem;
  font-weight: 700;
  color: var(--element-accent);
  white-space: nowrap;
}

.creature-card__badge {
  font-size: 1.375rem;
}

/* === Card Image === */
.creature-card__image-frame {
  height: 220px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--ink-black);
  border: 1px solid var(--ink-border);
  border-radius: 10px;
  overflow: hidden;
  margin-bottom: 1rem;
}

.creature-card__image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  opacity: 0;
}

.creature-card__image.loaded {
  opacity: 1;
  transition: opacity var(--transition-normal);
}

.creature-card__image-placeholder {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
  color: var(--text-muted);
}

.creature-card__image-glyph {
  font-size: 2rem;
  opacity: 0.5;
}

/* === Attacks === */
.creature-card__attacks {
  display: flex;
  flex-direction: column;
  gap: 0.6rem;
  margin-bottom: 1rem;
}

.attack {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  background: rgba(0, 0, 0, 0.25);
  border: 1px solid var(--ink-border);
  border-radius: 8px;
  padding: 0.6rem 0.75rem;
}

.attack__info {
  flex: 1;
  min-width: 0;
}

.attack__name {
  font-weight: 700;
  overflow-wrap: anywhere;
}

.attack__desc {
  font-size: 0.8125rem;
  color: var(--text-secondary);
  overflow-wrap: anywhere;
}

.attack__damage {
  font-size: 1.25rem;
  font-weight: 700;
  color: var(--element-accent);
}

/* === Card Footer === */
.creature-card__footer {
  display: flex;
  justify-content: space-between;
  border-top: 1px solid var(--ink-border);
  padding-top: 0.6rem;
  margin-bottom: 0.6rem;
}

.creature-card__stat {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.creature-card__stat-label {
  font-size: 0.6875rem;
  text-transform: uppercase;
  letter-spacing: 0.1em;
  color: var(--text-muted);
}

.creature-card__flavor {
  font-family: var(--font-serif);
  font-style: italic;
  font-size: 0.875rem;
  color: var(--text-secondary);
  text-align: center;
  min-height: 1.2em;
}

/* === Toast === */
.toast {
  position: fixed;
  left: 50%;
  bottom: 2rem;
  transform: translateX(-50%);
  max-width: 80vw;
  background: var(--ink-lighter);
  border: 1px solid var(--danger);
  border-radius: 8px;
  color: var(--text-primary);
  padding: 0.75rem 1.25rem;
  box-shadow: 0 8px 30px rgba(0, 0, 0, 0.5);
  animation: toast-in 200ms ease;
  z-index: 100;
}

@keyframes toast-in {
  from {
    opacity: 0;
    transform: translateX(-50%) translateY(12px);
  }
  to {
    opacity: 1;
    transform: translateX(-50%) translateY(0);
  }
}

/* === Element Accents === */
[data-element="Fire"]     { --element-accent: #ff6b35; --element-tint: rgba(255, 107, 53, 0.18); }
[data-element="Water"]    { --element-accent: #3fa7f5; --element-tint: rgba(63, 167, 245, 0.18); }
[data-element="Grass"]    { --element-accent: #63c74d; --element-tint: rgba(99, 199, 77, 0.18); }
[data-element="Electric"] { --element-accent: #ffd93d; --element-tint: rgba(255, 217, 61, 0.18); }
[data-element="Ice"]      { --element-accent: #9fd8ef; --element-tint: rgba(159, 216, 239, 0.18); }
[data-element="Fighting"] { --element-accent: #c1654b; --element-tint: rgba(193, 101, 75, 0.18); }
[data-element="Poison"]   { --element-accent: #a764c4; --element-tint: rgba(167, 100, 196, 0.18); }
[data-element="Psychic"]  { --element-accent: #f266a9; --element-tint: rgba(242, 102, 169, 0.18); }
[data-element="Dragon"]   { --element-accent: #6a5ae0; --element-tint: rgba(106, 90, 224, 0.18); }
[data-element="Fairy"]    { --element-accent: #f7b6d2; --element-tint: rgba(247, 182, 210, 0.18); }
[data-element="Ghost"]    { --element-accent: #7b62a3; --element-tint: rgba(123, 98, 163, 0.18); }
[data-element="Normal"]   { --element-accent: #a8a8b4; --element-tint: rgba(168, 168, 180, 0.18); }

/* === Responsive === */
@media (max-width: 760px) {
  .studio-layout {
    grid-template-columns: 1fr;
  }
}
"#;
