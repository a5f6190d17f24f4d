//! Global CSS styles for LeadPulse.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --bg: #0f172a;
  --bg-card: #111c33;
  --border: #1e2a44;

  --primary: #6366f1;
  --primary-glow: rgba(99, 102, 241, 0.35);
  --success: #22c55e;
  --danger: #ef4444;
  --warning: #f59e0b;

  --text-primary: #f8fafc;
  --text-secondary: rgba(248, 250, 252, 0.72);
  --text-muted: rgba(248, 250, 252, 0.5);

  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --radius: 12px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--bg);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.5;
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  gap: 2rem;
  padding: 1rem 2rem;
  border-bottom: 1px solid var(--border);
}
.app-title { font-weight: 700; font-size: 1.25rem; }
.nav-links { display: flex; gap: 1rem; flex: 1; }
.nav-link { color: var(--text-secondary); text-decoration: none; }
.nav-link.active { color: var(--text-primary); border-bottom: 2px solid var(--primary); }
.nav-campaign {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  background: transparent;
  border: 1px solid var(--border);
  border-radius: 999px;
  color: var(--text-primary);
  padding: 0.25rem 0.75rem;
  cursor: pointer;
}

/* === Layout === */
.landing, .dashboard { max-width: 960px; margin: 0 auto; padding: 2rem; }
.landing-header { text-align: center; padding: 4rem 0; }
.page-title { font-size: 3rem; }
.tagline { color: var(--text-secondary); margin: 1rem 0 2rem; }
.dashboard { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.card {
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
}
.section-header { font-size: 1.125rem; margin-bottom: 1rem; }
.empty-state { color: var(--text-muted); }
.summary-name { font-weight: 600; }
.summary-status { color: var(--text-secondary); margin-bottom: 0.75rem; }
.summary-details { display: grid; grid-template-columns: auto 1fr; gap: 0.25rem 1rem; margin: 1rem 0; }
.summary-details dt { color: var(--text-muted); }

/* === Forms === */
.field { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 1rem; }
.field-label { color: var(--text-secondary); font-size: 0.875rem; }
.text-input {
  background: var(--bg);
  border: 1px solid var(--border);
  border-radius: 8px;
  color: var(--text-primary);
  padding: 0.5rem 0.75rem;
}
.error-text { color: var(--danger); font-size: 0.875rem; margin-bottom: 0.75rem; }

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-danger, .btn-ghost {
  border-radius: 8px;
  padding: 0.5rem 1rem;
  cursor: pointer;
  transition: all var(--transition-fast);
  font-weight: 500;
}
.btn-primary { background: var(--primary); border: 1px solid var(--primary); color: white; }
.btn-primary:hover { box-shadow: 0 0 12px var(--primary-glow); }
.btn-secondary { background: transparent; border: 1px solid var(--border); color: var(--text-primary); }
.btn-danger { background: transparent; border: 1px solid var(--danger); color: var(--danger); }
.btn-ghost { background: transparent; border: none; color: var(--primary); }
.btn-large { font-size: 1.125rem; padding: 0.75rem 1.5rem; }
button:disabled { opacity: 0.5; cursor: not-allowed; }
.icon-btn { background: transparent; border: none; color: var(--text-muted); cursor: pointer; font-size: 1.25rem; }
.icon-btn:hover { color: var(--text-primary); }
.modal-actions { display: flex; gap: 0.75rem; justify-content: flex-end; margin-top: 1.5rem; }

/* === Progress === */
.progress { display: flex; align-items: center; gap: 0.75rem; }
.progress-track { flex: 1; height: 8px; background: var(--border); border-radius: 999px; overflow: hidden; }
.progress-fill { height: 100%; transition: width var(--transition-normal); }
.progress-fill.active { background: var(--primary); }
.progress-fill.success { background: var(--success); }
.progress-fill.danger { background: var(--danger); }
.progress-label { font-variant-numeric: tabular-nums; color: var(--text-secondary); }

/* === Status Badge === */
.status-badge { display: inline-flex; align-items: center; gap: 0.375rem; font-size: 0.75rem; text-transform: uppercase; }
.status-dot { width: 8px; height: 8px; border-radius: 50%; }
.status-badge.sending .status-dot { background: var(--primary); animation: pulse 1.5s infinite; }
.status-badge.completed .status-dot { background: var(--success); }
.status-badge.failed .status-dot { background: var(--danger); }

/* === Campaign Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(2, 6, 23, 0.7);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 100;
}
.modal-overlay.hidden { display: none; }
.campaign-modal {
  width: min(560px, 92vw);
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
}
.modal-header { display: flex; align-items: flex-start; gap: 1rem; }
.modal-header > div { flex: 1; }
.modal-title { font-size: 1.25rem; }
.modal-description { color: var(--text-secondary); font-size: 0.875rem; }
.modal-footnote { color: var(--text-muted); font-size: 0.875rem; }
.stat-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; }
.stat { display: flex; flex-direction: column; align-items: center; }
.stat-value { font-size: 1.5rem; font-weight: 700; }
.stat-value.success { color: var(--success); }
.stat-value.danger { color: var(--danger); }
.stat-label { color: var(--text-muted); font-size: 0.75rem; }
.current-lead {
  display: flex;
  gap: 0.75rem;
  align-items: baseline;
  border: 1px dashed var(--border);
  border-radius: 8px;
  padding: 0.75rem;
}
.current-lead-label { color: var(--text-muted); font-size: 0.75rem; }
.current-lead-phone { color: var(--text-secondary); font-variant-numeric: tabular-nums; }

/* === Floating Notification === */
.campaign-notification {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  width: 320px;
  background: var(--bg-card);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  z-index: 90;
}
.notification-header { display: flex; align-items: center; gap: 0.5rem; }
.notification-title { flex: 1; font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.notification-footer { display: flex; align-items: center; justify-content: space-between; }
.notification-meta { color: var(--text-secondary); font-size: 0.75rem; }
.pulse-dot { width: 8px; height: 8px; border-radius: 50%; background: var(--primary); animation: pulse 1.5s infinite; }

/* === Completion Overlay === */
.completion-overlay {
  position: fixed;
  inset: 0;
  background: rgba(2, 6, 23, 0.92);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 200;
}
.completion-card {
  width: min(520px, 92vw);
  text-align: center;
  background: var(--bg-card);
  border-radius: var(--radius);
  padding: 2rem;
  border: 1px solid var(--border);
}
.completion-card.success { border-color: var(--success); }
.completion-card.failed { border-color: var(--danger); }
.completion-icon { font-size: 3rem; }
.completion-card.success .completion-icon { color: var(--success); }
.completion-card.failed .completion-icon { color: var(--danger); }
.completion-title { font-size: 1.75rem; margin: 0.5rem 0; }
.completion-subtitle { color: var(--text-secondary); margin-bottom: 1.5rem; }

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.35; }
}
"#;
