pub fn render_index(today: &str) -> String {
    INDEX_HTML.replace("{{TODAY}}", today)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Job Application Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --muted: #6f6a65;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --surface: white;
      --line: rgba(47, 72, 88, 0.1);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      --ok: #2d7a4b;
      --bad: #c63b2b;
      --warn: #b7791f;
    }

    :root[data-theme="dark"] {
      --bg-1: #151a1e;
      --bg-2: #23313a;
      --ink: #ece7df;
      --muted: #a39d95;
      --card: rgba(28, 34, 39, 0.92);
      --surface: #1f262c;
      --line: rgba(236, 231, 223, 0.12);
      --shadow: 0 24px 60px rgba(0, 0, 0, 0.4);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), var(--bg-1) 60%, var(--bg-2) 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1080px, 100%);
      margin: 0 auto;
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.8rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    h3 {
      margin: 0 0 10px;
      font-size: 0.95rem;
      font-weight: 600;
    }

    .toolbar,
    .filters,
    .bulk,
    .pager {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 10px;
    }

    button,
    select,
    input {
      font: inherit;
      color: inherit;
    }

    button {
      appearance: none;
      border: 1px solid var(--line);
      background: var(--surface);
      border-radius: 999px;
      padding: 9px 16px;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    button:active {
      transform: scale(0.98);
    }

    button:disabled {
      opacity: 0.45;
      cursor: not-allowed;
    }

    .btn-primary {
      background: var(--accent);
      border-color: transparent;
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
    }

    .btn-ghost {
      background: transparent;
    }

    .btn-ok {
      color: var(--ok);
    }

    .btn-bad {
      color: var(--bad);
    }

    select,
    input[type="text"],
    input[type="url"],
    input[type="date"] {
      border: 1px solid var(--line);
      background: var(--surface);
      border-radius: 12px;
      padding: 9px 12px;
    }

    .search {
      flex: 1 1 240px;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat,
    .chart-card {
      background: var(--surface);
      border-radius: 18px;
      padding: 18px;
      border: 1px solid var(--line);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent);
    }

    .charts {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 16px;
      margin-top: 16px;
    }

    .chart-body {
      display: flex;
      align-items: center;
      gap: 18px;
    }

    .chart-body svg {
      width: 160px;
      height: 160px;
      flex: none;
    }

    .legend {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
    }

    .legend li {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .swatch {
      width: 12px;
      height: 12px;
      border-radius: 4px;
      display: inline-block;
    }

    .bulk {
      padding: 12px 16px;
      border-radius: 16px;
      background: rgba(47, 72, 88, 0.08);
    }

    .bulk .count {
      flex: 1;
      color: var(--muted);
    }

    .table-wrap {
      overflow-x: auto;
      border-radius: 18px;
      border: 1px solid var(--line);
      background: var(--surface);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.92rem;
    }

    th,
    td {
      text-align: left;
      padding: 12px 14px;
      border-bottom: 1px solid var(--line);
      vertical-align: middle;
    }

    th {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    td .sub {
      display: block;
      color: var(--muted);
      font-size: 0.82rem;
    }

    td select {
      padding: 5px 8px;
      border-radius: 999px;
      font-size: 0.82rem;
      font-weight: 600;
    }

    .status-accepted { color: var(--ok); }
    .status-rejected { color: var(--bad); }
    .status-pending { color: var(--warn); }
    .status-interview { color: var(--accent-2); }
    .status-never_responded { color: var(--muted); }

    :root[data-theme="dark"] .status-interview { color: #8fb8cf; }

    .row-actions {
      display: flex;
      gap: 10px;
      align-items: center;
    }

    .row-actions button {
      padding: 5px 10px;
      font-size: 0.82rem;
    }

    .row-actions a {
      color: var(--accent);
      font-weight: 600;
      text-decoration: none;
    }

    .empty {
      text-align: center;
      padding: 40px 12px;
      color: var(--muted);
    }

    .pager {
      justify-content: space-between;
      color: var(--muted);
      font-size: 0.9rem;
    }

    dialog {
      border: none;
      border-radius: 22px;
      padding: 26px;
      width: min(460px, 92vw);
      background: var(--surface);
      color: var(--ink);
      box-shadow: var(--shadow);
    }

    dialog.wide {
      width: min(720px, 94vw);
    }

    dialog::backdrop {
      background: rgba(21, 26, 30, 0.45);
      backdrop-filter: blur(3px);
    }

    .dialog-head {
      display: flex;
      align-items: center;
      justify-content: space-between;
      margin-bottom: 16px;
    }

    .dialog-head h2 {
      margin: 0;
    }

    form.stack,
    .stack {
      display: grid;
      gap: 12px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.9rem;
      font-weight: 500;
    }

    .form-actions {
      display: flex;
      justify-content: flex-end;
      gap: 10px;
      margin-top: 6px;
    }

    .shortcuts {
      display: grid;
      grid-template-columns: 1fr auto;
      gap: 10px 24px;
      font-size: 0.95rem;
    }

    kbd {
      font-family: ui-monospace, monospace;
      background: rgba(47, 72, 88, 0.1);
      border-radius: 6px;
      padding: 2px 8px;
    }

    .description-text {
      max-height: 60vh;
      overflow-y: auto;
      line-height: 1.55;
      white-space: pre-wrap;
    }

    .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .hint[data-type="error"] {
      color: var(--bad);
    }

    .toasts {
      position: fixed;
      right: 18px;
      bottom: 18px;
      display: grid;
      gap: 10px;
      z-index: 10;
    }

    .toast {
      background: var(--surface);
      border: 1px solid var(--line);
      border-left: 4px solid var(--ok);
      border-radius: 14px;
      padding: 12px 16px;
      box-shadow: var(--shadow);
      min-width: 220px;
      animation: rise 200ms ease;
    }

    .toast[data-type="error"] {
      border-left-color: var(--bad);
    }

    .toast strong {
      display: block;
    }

    .hidden {
      display: none !important;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 24px 16px;
      }
      .chart-body {
        flex-direction: column;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Job Application Tracker</h1>
      <div class="toolbar">
        <button class="btn-ghost" id="theme-btn" type="button" title="Toggle theme">Theme</button>
        <button class="btn-ghost" id="shortcuts-btn" type="button" title="Keyboard shortcuts">Shortcuts</button>
        <button class="btn-ghost" id="settings-btn" type="button">Settings</button>
        <button class="btn-primary" id="add-btn" type="button">Add Application</button>
      </div>
    </header>

    <section>
      <h2>Application Statistics</h2>
      <div class="panel">
        <div class="stat">
          <span class="label">Total Applications</span>
          <span id="stat-total" class="value">0</span>
        </div>
        <div class="stat">
          <span class="label">Success Rate</span>
          <span id="stat-rate" class="value">0.0%</span>
        </div>
        <div class="stat">
          <span class="label">Accepted</span>
          <span id="stat-accepted" class="value">0</span>
        </div>
      </div>
      <div class="charts">
        <div class="chart-card">
          <h3>Application Status Distribution</h3>
          <div class="chart-body" id="status-chart"></div>
        </div>
        <div class="chart-card">
          <h3>Platform Distribution</h3>
          <div class="chart-body" id="platform-chart"></div>
        </div>
      </div>
    </section>

    <section class="stack">
      <div class="filters">
        <input class="search" id="search" type="text" placeholder="Search by company or position..." />
        <select id="filter-status" aria-label="Status">
          <option value="all">All Status</option>
          <option value="pending">Pending</option>
          <option value="interview">Interview</option>
          <option value="accepted">Accepted</option>
          <option value="rejected">Rejected</option>
          <option value="never_responded">Never Responded</option>
        </select>
        <select id="filter-date" aria-label="Date range">
          <option value="all">All Time</option>
          <option value="today">Today</option>
          <option value="week">This Week</option>
          <option value="month">This Month</option>
        </select>
        <select id="per-page" aria-label="Items per page">
          <option value="10">10 per page</option>
          <option value="25">25 per page</option>
          <option value="50">50 per page</option>
          <option value="100">100 per page</option>
        </select>
      </div>

      <div class="bulk hidden" id="bulk-bar">
        <span class="count" id="bulk-count"></span>
        <button class="btn-ok" type="button" data-bulk-status="accepted">Mark Accepted</button>
        <button class="btn-bad" type="button" data-bulk-status="rejected">Mark Rejected</button>
        <button class="btn-bad" type="button" id="bulk-delete">Delete</button>
        <button class="btn-ghost" type="button" id="bulk-clear">Clear Selection</button>
      </div>

      <div class="table-wrap">
        <table>
          <thead>
            <tr>
              <th><input type="checkbox" id="select-all" aria-label="Select all applications" /></th>
              <th>Company</th>
              <th>Platform</th>
              <th>Date Applied</th>
              <th>Status</th>
              <th>Actions</th>
            </tr>
          </thead>
          <tbody id="rows"></tbody>
        </table>
        <div class="empty" id="empty">Loading applications...</div>
      </div>

      <div class="pager">
        <span id="page-info"></span>
        <div class="toolbar">
          <button type="button" id="prev-page">Previous</button>
          <button type="button" id="next-page">Next</button>
        </div>
      </div>
    </section>
  </main>

  <dialog id="form-dialog">
    <div class="dialog-head">
      <h2 id="form-title">Add New Application</h2>
      <button class="btn-ghost" type="button" data-close>Close</button>
    </div>
    <form class="stack" id="app-form">
      <label>Company Name
        <input type="text" name="companyName" required />
      </label>
      <label>Position
        <input type="text" name="position" placeholder="Optional" />
      </label>
      <label>Platform
        <select name="platform">
          <option value="">Select platform</option>
          <option value="google_jobs">Google Jobs</option>
          <option value="linkedin">LinkedIn</option>
          <option value="indeed">Indeed</option>
          <option value="glassdoor">Glassdoor</option>
          <option value="other">Other</option>
        </select>
      </label>
      <label class="hidden" id="custom-platform-field">Custom Platform
        <input type="text" name="customPlatform" />
      </label>
      <label>Job Posting URL
        <input type="url" name="jobUrl" required />
      </label>
      <label>Date Applied
        <input type="date" name="dateApplied" required />
      </label>
      <label>Status
        <select name="status">
          <option value="pending">Pending</option>
          <option value="interview">Interview</option>
          <option value="accepted">Accepted</option>
          <option value="rejected">Rejected</option>
          <option value="never_responded">Never Responded</option>
        </select>
      </label>
      <div class="form-actions">
        <button class="btn-ghost" type="button" data-close>Cancel</button>
        <button class="btn-primary" type="submit" id="form-submit">Add Application</button>
      </div>
    </form>
  </dialog>

  <dialog id="settings-dialog">
    <div class="dialog-head">
      <h2>Settings</h2>
      <button class="btn-ghost" type="button" data-close>Close</button>
    </div>
    <div class="stack">
      <h3>Export Data</h3>
      <button type="button" id="export-csv">Export to Spreadsheet (CSV)</button>
      <button type="button" id="export-json">Backup (JSON)</button>
      <h3>Import Data</h3>
      <input type="file" id="import-file" accept=".json,application/json" />
      <p class="hint">Importing replaces all current applications.</p>
    </div>
  </dialog>

  <dialog id="shortcuts-dialog">
    <div class="dialog-head">
      <h2>Keyboard Shortcuts</h2>
      <button class="btn-ghost" type="button" data-close>Close</button>
    </div>
    <div class="shortcuts">
      <span>New Application</span><kbd>Shift + N</kbd>
      <span>Search</span><kbd>Shift + F</kbd>
      <span>Clear Selection</span><kbd>Esc</kbd>
    </div>
  </dialog>

  <dialog id="description-dialog" class="wide">
    <div class="dialog-head">
      <h2 id="description-title">Job Description</h2>
      <button class="btn-ghost" type="button" data-close>Close</button>
    </div>
    <p class="hint" id="description-status"></p>
    <div class="description-text" id="description-text"></div>
  </dialog>

  <div class="toasts" id="toasts"></div>

  <script>
    const TODAY = '{{TODAY}}';
    const STATUS_LABELS = {
      pending: 'Pending',
      rejected: 'Rejected',
      accepted: 'Accepted',
      never_responded: 'Never Responded',
      interview: 'Interview'
    };
    const PLATFORM_LABELS = {
      google_jobs: 'Google Jobs',
      linkedin: 'LinkedIn',
      indeed: 'Indeed',
      glassdoor: 'Glassdoor',
      other: 'Other'
    };
    const STATUS_COLORS = {
      accepted: '#2d7a4b',
      rejected: '#c63b2b',
      pending: '#e0a43a',
      interview: '#2f4858',
      never_responded: '#9ca3af'
    };
    const PLATFORM_COLORS = {
      google_jobs: 'rgb(66, 133, 244)',
      linkedin: 'rgb(10, 102, 194)',
      indeed: 'rgb(2, 120, 174)',
      glassdoor: 'rgb(0, 182, 125)',
      other: 'rgb(156, 163, 175)',
      unspecified: 'rgb(209, 213, 219)'
    };

    const state = {
      search: '',
      status: 'all',
      dateRange: 'all',
      page: 1,
      perPage: 10,
      items: [],
      selected: new Set(),
      editing: null
    };

    const $ = (id) => document.getElementById(id);
    const rowsEl = $('rows');
    const emptyEl = $('empty');
    const formDialog = $('form-dialog');
    const form = $('app-form');

    const escapeHtml = (value) =>
      String(value ?? '').replace(/[&<>"']/g, (ch) => ({
        '&': '&amp;',
        '<': '&lt;',
        '>': '&gt;',
        '"': '&quot;',
        "'": '&#39;'
      })[ch]);

    const isWebUrl = (value) => /^https?:\/\//i.test(String(value ?? '').trim());

    const toast = (title, description, type = 'ok') => {
      const el = document.createElement('div');
      el.className = 'toast';
      el.dataset.type = type;
      el.innerHTML = `<strong>${escapeHtml(title)}</strong>${escapeHtml(description)}`;
      $('toasts').appendChild(el);
      setTimeout(() => el.remove(), 3200);
    };

    const api = async (path, options = {}) => {
      const res = await fetch(path, options);
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      if (res.status === 204) {
        return null;
      }
      return res.json();
    };

    const sendJson = (path, method, body) =>
      api(path, {
        method,
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });

    const formatDate = (value) => {
      const [y, m, d] = value.split('-').map(Number);
      return new Date(y, m - 1, d).toLocaleDateString();
    };

    const optionList = (labels, selected, includeBlank) => {
      const blank = includeBlank
        ? `<option value="" ${selected ? '' : 'selected'}>Unspecified</option>`
        : '';
      return blank + Object.entries(labels)
        .map(([value, label]) =>
          `<option value="${value}" ${value === selected ? 'selected' : ''}>${label}</option>`)
        .join('');
    };

    const renderRows = () => {
      rowsEl.innerHTML = state.items.map((app) => `
        <tr data-id="${app.id}">
          <td><input type="checkbox" data-select ${state.selected.has(app.id) ? 'checked' : ''}
            aria-label="Select ${escapeHtml(app.companyName)} application" /></td>
          <td>${escapeHtml(app.companyName)}
            ${app.position ? `<span class="sub">${escapeHtml(app.position)}</span>` : ''}</td>
          <td>
            <select data-platform>${optionList(PLATFORM_LABELS, app.platform || '', true)}</select>
            ${app.platform === 'other' && app.customPlatform
              ? `<span class="sub">${escapeHtml(app.customPlatform)}</span>` : ''}
          </td>
          <td>${formatDate(app.dateApplied)}</td>
          <td><select data-status class="status-${app.status}">${optionList(STATUS_LABELS, app.status, false)}</select></td>
          <td>
            <div class="row-actions">
              <button type="button" data-edit>Edit</button>
              ${isWebUrl(app.jobUrl)
                ? `<a href="${escapeHtml(app.jobUrl)}" target="_blank" rel="noopener noreferrer">View</a>`
                : ''}
              <button type="button" data-describe>Description</button>
              <button type="button" class="btn-bad" data-delete>Delete</button>
            </div>
          </td>
        </tr>`).join('');

      emptyEl.textContent = 'No job applications found.';
      emptyEl.classList.toggle('hidden', state.items.length > 0);
      renderSelection();
    };

    const renderSelection = () => {
      const count = state.selected.size;
      $('bulk-bar').classList.toggle('hidden', count === 0);
      $('bulk-count').textContent = `${count} item${count !== 1 ? 's' : ''} selected`;
      const allChecked = state.items.length > 0 && state.items.every((app) => state.selected.has(app.id));
      $('select-all').checked = allChecked;
    };

    const renderPager = (page) => {
      state.page = page.page;
      $('page-info').textContent =
        `Page ${page.page} of ${page.total_pages} (${page.total_items} application${page.total_items !== 1 ? 's' : ''})`;
      $('prev-page').disabled = page.page <= 1;
      $('next-page').disabled = page.page >= page.total_pages;
    };

    const donut = (slices, colors) => {
      const total = slices.reduce((sum, slice) => sum + slice.value, 0);
      if (total === 0) {
        return '<p class="hint">No data yet.</p>';
      }
      const radius = 70;
      const circumference = 2 * Math.PI * radius;
      let offset = 0;
      const arcs = slices.map((slice) => {
        const length = (slice.value / total) * circumference;
        const arc = `<circle r="${radius}" cx="80" cy="80" fill="none" stroke="${colors[slice.key]}"
          stroke-width="18" stroke-dasharray="${length} ${circumference - length}"
          stroke-dashoffset="${-offset}" transform="rotate(-90 80 80)" />`;
        offset += length;
        return arc;
      }).join('');
      const legend = slices.map((slice) =>
        `<li><span class="swatch" style="background:${colors[slice.key]}"></span>${escapeHtml(slice.label)}: ${slice.value}</li>`
      ).join('');
      return `<svg viewBox="0 0 160 160" role="img">${arcs}</svg><ul class="legend">${legend}</ul>`;
    };

    const loadStats = async () => {
      const stats = await api('/api/stats');
      $('stat-total').textContent = stats.total;
      $('stat-rate').textContent = `${stats.success_rate}%`;
      $('stat-accepted').textContent = stats.accepted;
      $('status-chart').innerHTML = donut(stats.status_distribution, STATUS_COLORS);
      $('platform-chart').innerHTML = donut(stats.platform_distribution, PLATFORM_COLORS);
    };

    const loadApplications = async () => {
      const params = new URLSearchParams({
        q: state.search,
        status: state.status,
        date_range: state.dateRange,
        page: String(state.page),
        per_page: String(state.perPage)
      });
      const page = await api(`/api/applications?${params}`);
      state.items = page.items;
      renderPager(page);
      renderRows();
    };

    const refresh = async () => {
      await Promise.all([loadApplications(), loadStats()]);
    };

    const report = (action) => (err) => toast('Error', `Failed to ${action}: ${err.message}`, 'error');

    const resetToFirstPage = () => {
      state.page = 1;
      loadApplications().catch(report('load applications'));
    };

    const openForm = (app) => {
      state.editing = app || null;
      form.reset();
      $('form-title').textContent = app ? 'Edit Application' : 'Add New Application';
      $('form-submit').textContent = app ? 'Save Changes' : 'Add Application';
      form.companyName.value = app ? app.companyName : '';
      form.position.value = app?.position || '';
      form.platform.value = app?.platform || '';
      form.customPlatform.value = app?.customPlatform || '';
      form.jobUrl.value = app ? app.jobUrl : '';
      form.dateApplied.value = app ? app.dateApplied : TODAY;
      form.status.value = app ? app.status : 'pending';
      syncCustomPlatform();
      formDialog.showModal();
      form.companyName.focus();
    };

    const syncCustomPlatform = () => {
      $('custom-platform-field').classList.toggle('hidden', form.platform.value !== 'other');
    };

    const findApp = (id) => state.items.find((app) => app.id === id);

    const showDescription = async (app) => {
      const dialog = $('description-dialog');
      $('description-title').textContent = `${app.companyName}${app.position ? ` - ${app.position}` : ''}`;
      $('description-status').textContent = 'Loading job description...';
      $('description-status').dataset.type = '';
      $('description-text').textContent = '';
      dialog.showModal();
      try {
        const result = await api(`/api/applications/${app.id}/description`);
        $('description-status').textContent = '';
        $('description-text').textContent = result.text;
      } catch (err) {
        $('description-status').textContent = err.message;
        $('description-status').dataset.type = 'error';
      }
    };

    const download = async (path, filename) => {
      const res = await fetch(path);
      if (!res.ok) {
        throw new Error(await res.text() || 'Export failed');
      }
      const url = URL.createObjectURL(await res.blob());
      const a = document.createElement('a');
      a.href = url;
      a.download = filename;
      document.body.appendChild(a);
      a.click();
      a.remove();
      URL.revokeObjectURL(url);
    };

    const applyTheme = (theme) => {
      document.documentElement.dataset.theme = theme;
      localStorage.setItem('job-tracker-theme', theme);
    };

    applyTheme(localStorage.getItem('job-tracker-theme') ||
      (window.matchMedia('(prefers-color-scheme: dark)').matches ? 'dark' : 'light'));

    $('theme-btn').addEventListener('click', () => {
      applyTheme(document.documentElement.dataset.theme === 'dark' ? 'light' : 'dark');
    });
    $('add-btn').addEventListener('click', () => openForm(null));
    $('settings-btn').addEventListener('click', () => $('settings-dialog').showModal());
    $('shortcuts-btn').addEventListener('click', () => $('shortcuts-dialog').showModal());
    document.querySelectorAll('[data-close]').forEach((button) => {
      button.addEventListener('click', () => button.closest('dialog').close());
    });

    let searchTimer;
    $('search').addEventListener('input', (event) => {
      clearTimeout(searchTimer);
      searchTimer = setTimeout(() => {
        state.search = event.target.value;
        resetToFirstPage();
      }, 200);
    });
    $('filter-status').addEventListener('change', (event) => {
      state.status = event.target.value;
      resetToFirstPage();
    });
    $('filter-date').addEventListener('change', (event) => {
      state.dateRange = event.target.value;
      resetToFirstPage();
    });
    $('per-page').addEventListener('change', (event) => {
      state.perPage = Number(event.target.value);
      resetToFirstPage();
    });
    $('prev-page').addEventListener('click', () => {
      state.page -= 1;
      loadApplications().catch(report('load applications'));
    });
    $('next-page').addEventListener('click', () => {
      state.page += 1;
      loadApplications().catch(report('load applications'));
    });

    $('select-all').addEventListener('change', (event) => {
      state.items.forEach((app) => {
        if (event.target.checked) {
          state.selected.add(app.id);
        } else {
          state.selected.delete(app.id);
        }
      });
      renderRows();
    });

    rowsEl.addEventListener('change', (event) => {
      const row = event.target.closest('tr');
      const id = Number(row.dataset.id);
      if (event.target.matches('[data-select]')) {
        if (event.target.checked) {
          state.selected.add(id);
        } else {
          state.selected.delete(id);
        }
        renderSelection();
      } else if (event.target.matches('[data-status]')) {
        sendJson(`/api/applications/${id}/status`, 'PATCH', { status: event.target.value })
          .then(() => {
            toast('Success', 'Status updated');
            return refresh();
          })
          .catch(report('update status'));
      } else if (event.target.matches('[data-platform]')) {
        const platform = event.target.value || null;
        const customPlatform = platform === 'other'
          ? (window.prompt('Platform name', findApp(id)?.customPlatform || '') || null)
          : null;
        sendJson(`/api/applications/${id}/platform`, 'PATCH', { platform, customPlatform })
          .then(() => {
            toast('Success', 'Platform updated');
            return refresh();
          })
          .catch(report('update platform'));
      }
    });

    rowsEl.addEventListener('click', (event) => {
      const row = event.target.closest('tr');
      if (!row) {
        return;
      }
      const app = findApp(Number(row.dataset.id));
      if (!app) {
        return;
      }
      if (event.target.matches('[data-edit]')) {
        openForm(app);
      } else if (event.target.matches('[data-describe]')) {
        showDescription(app);
      } else if (event.target.matches('[data-delete]')) {
        api(`/api/applications/${app.id}`, { method: 'DELETE' })
          .then(() => {
            state.selected.delete(app.id);
            toast('Success', 'Application deleted successfully');
            return refresh();
          })
          .catch(report('delete application'));
      }
    });

    form.platform.addEventListener('change', syncCustomPlatform);
    form.addEventListener('submit', (event) => {
      event.preventDefault();
      const platform = form.platform.value || null;
      const payload = {
        companyName: form.companyName.value,
        position: form.position.value || null,
        platform,
        customPlatform: platform === 'other' ? (form.customPlatform.value || null) : null,
        jobUrl: form.jobUrl.value,
        dateApplied: form.dateApplied.value,
        status: form.status.value
      };
      const editing = state.editing;
      const request = editing
        ? sendJson(`/api/applications/${editing.id}`, 'PUT', payload)
        : sendJson('/api/applications', 'POST', payload);
      request
        .then(() => {
          formDialog.close();
          toast('Success', editing ? 'Application updated successfully' : 'Application added successfully');
          return refresh();
        })
        .catch(report(editing ? 'update application' : 'add application'));
    });

    document.querySelectorAll('[data-bulk-status]').forEach((button) => {
      button.addEventListener('click', () => {
        sendJson('/api/applications/bulk/status', 'POST', {
          ids: [...state.selected],
          status: button.dataset.bulkStatus
        })
          .then((result) => {
            state.selected.clear();
            toast('Success', `${result.updated} application(s) updated`);
            return refresh();
          })
          .catch(report('update status'));
      });
    });
    $('bulk-delete').addEventListener('click', () => {
      sendJson('/api/applications/bulk/delete', 'POST', { ids: [...state.selected] })
        .then((result) => {
          state.selected.clear();
          toast('Success', `${result.deleted} application(s) deleted`);
          return refresh();
        })
        .catch(report('delete applications'));
    });
    $('bulk-clear').addEventListener('click', () => {
      state.selected.clear();
      renderRows();
    });

    $('export-csv').addEventListener('click', () => {
      download('/api/export/csv', 'job-applications.csv')
        .then(() => toast('Success', 'Applications exported successfully'))
        .catch(report('export applications'));
    });
    $('export-json').addEventListener('click', () => {
      download('/api/export/json', 'job-applications-backup.json')
        .then(() => toast('Success', 'Applications exported to JSON successfully'))
        .catch(report('export applications to JSON'));
    });
    $('import-file').addEventListener('change', async (event) => {
      const file = event.target.files[0];
      if (!file) {
        return;
      }
      try {
        const text = await file.text();
        const result = await api('/api/import', {
          method: 'POST',
          headers: { 'content-type': 'application/json' },
          body: text
        });
        state.selected.clear();
        state.page = 1;
        $('settings-dialog').close();
        toast('Success', `${result.imported} application(s) imported successfully`);
        await refresh();
      } catch (err) {
        report('import applications')(err);
      } finally {
        event.target.value = '';
      }
    });

    window.addEventListener('keydown', (event) => {
      const tag = event.target.tagName.toLowerCase();
      if (tag === 'input' || tag === 'textarea' || tag === 'select') {
        return;
      }
      if (document.querySelector('dialog[open]')) {
        return;
      }
      const key = event.key.toLowerCase();
      if (event.shiftKey && key === 'n') {
        event.preventDefault();
        openForm(null);
      } else if (event.shiftKey && key === 'f') {
        event.preventDefault();
        $('search').focus();
      } else if (key === 'escape') {
        event.preventDefault();
        state.selected.clear();
        renderRows();
      }
    });

    refresh().catch(report('load applications'));
  </script>
</body>
</html>
"#;
