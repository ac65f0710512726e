//! Global CSS styles for the portfolio page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* BRAND */
  --primary: #6366f1;
  --primary-dark: #4f46e5;
  --accent: #06b6d4;
  --highlight: #f59e0b;

  /* BACKGROUNDS */
  --bg-dark: #0f172a;
  --bg-card: #1e293b;
  --border: #334155;

  /* TEXT */
  --text-primary: #f1f5f9;
  --text-secondary: #94a3b8;

  /* SEMANTIC */
  --success: #10b981;
  --danger: #ef4444;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 600ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
}

body {
  font-family: var(--font-sans);
  background: var(--bg-dark);
  color: var(--text-primary);
  line-height: 1.7;
  opacity: 0;
  transition: opacity var(--transition-slow);
}

body.loaded {
  opacity: 1;
}

/* === Header === */
.header-fixed {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: 80px;
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0 2rem;
  background: rgba(15, 23, 42, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--border);
  transition: transform var(--transition-normal);
  z-index: 100;
}

.logo {
  font-weight: 700;
  font-size: 1.25rem;
  color: var(--primary);
}

.menu-nav {
  display: flex;
  gap: 1.5rem;
  list-style: none;
}

.nav-link {
  color: var(--text-secondary);
  text-decoration: none;
  transition: color var(--transition-fast);
}

.nav-link:hover,
.nav-link.active {
  color: var(--primary);
}

.menu-toggle {
  display: none;
  background: none;
  border: none;
  cursor: pointer;
  flex-direction: column;
  gap: 5px;
}

.menu-toggle span {
  width: 25px;
  height: 3px;
  background: var(--text-primary);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.menu-toggle.active span:nth-child(1) { transform: rotate(45deg) translate(5px, 6px); }
.menu-toggle.active span:nth-child(2) { opacity: 0; }
.menu-toggle.active span:nth-child(3) { transform: rotate(-45deg) translate(5px, -6px); }

@media (max-width: 768px) {
  .menu-toggle { display: flex; }
  .menu-nav {
    position: absolute;
    top: 80px;
    left: 0;
    right: 0;
    flex-direction: column;
    padding: 1.5rem 2rem;
    background: var(--bg-dark);
    transform: translateY(-150%);
    transition: transform var(--transition-normal);
  }
  .menu-nav.active { transform: translateY(0); }
}

/* === Sections === */
section {
  padding: 6rem 2rem 4rem;
  max-width: 1100px;
  margin: 0 auto;
}

.section-title {
  font-size: 2rem;
  margin-bottom: 2rem;
  color: var(--text-primary);
}

.hero-title {
  font-size: 3rem;
  line-height: 1.2;
}

.hero-subtitle {
  color: var(--accent);
  font-size: 1.25rem;
  margin: 1rem 0 2rem;
}

/* === Reveal animations === */
[data-aos] {
  opacity: 0;
  transition: opacity var(--transition-slow), transform var(--transition-slow);
}

[data-aos].aos-animate {
  opacity: 1;
  transform: none !important;
}

/* === Skills === */
.skill {
  margin-bottom: 1.25rem;
}

.skill-name {
  display: flex;
  justify-content: space-between;
  color: var(--text-secondary);
}

.skill-track {
  height: 8px;
  border-radius: 4px;
  background: var(--bg-card);
  overflow: hidden;
}

.skill-bar {
  height: 100%;
  width: var(--current-level, 0%);
  background: linear-gradient(90deg, var(--primary), var(--accent));
  transition: width 1.2s ease;
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 2rem;
}

.contact-info {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.contact-item {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  padding: 0.75rem 1rem;
  background: var(--bg-card);
  border-radius: 8px;
}

.form-group {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
  margin-bottom: 1rem;
}

.input-label {
  color: var(--text-secondary);
  font-size: 0.9rem;
}

.input-hint {
  font-style: italic;
  opacity: 0.7;
}

.input-field {
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  background: var(--bg-card);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
}

.textarea {
  resize: vertical;
}

.form-actions {
  display: flex;
  gap: 1rem;
}

.feedback-message {
  margin-top: 1rem;
  padding: 0.9rem 1rem;
  border-radius: 8px;
}

.feedback-message.success {
  background: rgba(16, 185, 129, 0.15);
  color: var(--success);
}

.feedback-message.error {
  background: rgba(239, 68, 68, 0.15);
  color: var(--danger);
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.75rem 1.5rem;
  border-radius: 8px;
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-fast), opacity var(--transition-fast);
}

.btn:disabled {
  opacity: 0.6;
  cursor: not-allowed;
}

.btn-primary {
  background: var(--primary);
  border: none;
  color: white;
}

.btn-primary:hover:not(:disabled) {
  background: var(--primary-dark);
}

.btn-secondary {
  background: transparent;
  border: 1px solid var(--border);
  color: var(--text-secondary);
}

.spinner {
  width: 14px;
  height: 14px;
  border: 2px solid rgba(255, 255, 255, 0.4);
  border-top-color: white;
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.copy-btn {
  padding: 0.3rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: 6px;
  background: transparent;
  color: var(--text-secondary);
  cursor: pointer;
}

.copy-btn.copied {
  border-color: var(--success);
  color: var(--success);
}

/* === Scroll to top === */
.scroll-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  width: 48px;
  height: 48px;
  border: none;
  border-radius: 50%;
  background: var(--primary);
  color: white;
  font-size: 1.25rem;
  cursor: pointer;
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
}

.scroll-top.visible {
  opacity: 1;
  visibility: visible;
}

@media (max-width: 768px) {
  .contact-grid { grid-template-columns: 1fr; }
  .hero-title { font-size: 2.2rem; }
}
"#;
