//! Dashboard HTML.

use axum::response::Html;

pub async fn ui_index() -> Html<String> {
  let template = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>daybook</title>
  <style>
    body { font-family: system-ui, sans-serif; margin: 2rem; }
    h1 { margin: 0 0 1rem 0; }
    nav { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.5rem; }
    nav button { padding: .6rem 1rem; margin-right: .5rem; border: none; border-radius: 6px; background: #4a90d9; color: #fff; font-size: 1rem; cursor: pointer; }
    nav button:hover { background: #3a7bc0; }
    nav button.active { background: #2c5e93; }
    .cards { display: flex; flex-wrap: wrap; gap: 1rem; }
    .card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; width: 18rem; }
    .card h3 { margin: 0 0 .5rem 0; }
    .card .dates { color: #666; font-size: .85rem; margin: .5rem 0; }
    .card button { margin-right: .5rem; padding: .3rem .7rem; border: none; border-radius: 4px; cursor: pointer; }
    .card .edit { background: #4a90d9; color: #fff; }
    .card .del { background: #d9534f; color: #fff; }
    form { display: flex; flex-direction: column; gap: .8rem; max-width: 24rem; background: #f0f0f0; padding: 1.5rem; border-radius: 8px; }
    form label { font-size: .9rem; font-weight: 500; }
    form input, form textarea { padding: .6rem; border: 1px solid #ccc; border-radius: 6px; font: inherit; }
    form button { padding: .7rem; border: none; border-radius: 6px; background: #4a90d9; color: #fff; font-size: 1rem; cursor: pointer; }
    .activity { margin-top: 2rem; background: #0b1020; color: #e6edf3; padding: 1rem; border-radius: 8px; white-space: pre-wrap; font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace; font-size: 12px; }
    .lvl-INFO { color: #7ee787; }
    .lvl-ERROR { color: #ff7b72; }
    .lvl-WARN { color: #ffd33d; }
    html.dark body { background: #16181d; color: #e6edf3; }
    html.dark .card { border-color: #30363d; }
    html.dark .card .dates { color: #9aa4af; }
    html.dark form { background: #21262d; }
    html.dark form input, html.dark form textarea { background: #16181d; color: #e6edf3; border-color: #30363d; }
  </style>
</head>
<body>
  <nav>
    <div>
      <button id="nav-list" class="active" onclick="showView('list')">All Entries</button>
      <button id="nav-create" onclick="showView('create')">New Entry</button>
    </div>
    <label><input type="checkbox" id="mode" onchange="toggleMode()" /> Mode</label>
  </nav>
  <section id="list-view">
    <h1>All Entries</h1>
    <div id="cards" class="cards"></div>
    <h2>Activity</h2>
    <div id="activity" class="activity" aria-live="polite"></div>
  </section>
  <section id="create-view" hidden>
    <h1 id="form-title">New Entry</h1>
    <form onsubmit="event.preventDefault(); saveEntry();">
      <label for="title">Title</label>
      <input id="title" type="text" placeholder="Title" />
      <label for="description">Description</label>
      <textarea id="description" placeholder="Description"></textarea>
      <label for="scheduled_for">Scheduled For</label>
      <input id="scheduled_for" type="date" />
      <label for="created_at">Created At</label>
      <input id="created_at" type="date" />
      <button id="save" type="submit">Create</button>
    </form>
  </section>
  <script>
    const state = { entries: [], editingId: null };

    function esc(s) {
      const d = document.createElement('div');
      d.textContent = s == null ? '' : String(s);
      return d.innerHTML;
    }

    function today() {
      return new Date().toISOString().split('T')[0];
    }

    function showView(view) {
      document.getElementById('list-view').hidden = view !== 'list';
      document.getElementById('create-view').hidden = view !== 'create';
      document.getElementById('nav-list').classList.toggle('active', view === 'list');
      document.getElementById('nav-create').classList.toggle('active', view === 'create');
      if (view === 'create' && !state.editingId) resetForm();
    }

    function toggleMode() {
      document.documentElement.classList.toggle('dark', document.getElementById('mode').checked);
    }

    function resetForm() {
      state.editingId = null;
      document.getElementById('form-title').textContent = 'New Entry';
      document.getElementById('save').textContent = 'Create';
      document.getElementById('title').value = '';
      document.getElementById('description').value = '';
      document.getElementById('scheduled_for').value = today();
      document.getElementById('created_at').value = today();
    }

    async function loadEntries() {
      const res = await fetch('/get/');
      state.entries = await res.json();
      const el = document.getElementById('cards');
      if (!state.entries.length) { el.innerHTML = '<p>No entries yet.</p>'; return; }
      el.innerHTML = state.entries.map(e => `
        <div class="card">
          <h3>${esc(e.title)}</h3>
          <div>${esc(e.description)}</div>
          <div class="dates">Scheduled: ${esc(e.scheduled_for.split('T')[0])}<br/>Created: ${esc(e.created_at.split('T')[0])}</div>
          <button class="edit" onclick="editEntry('${encodeURIComponent(e.id)}')">Edit</button>
          <button class="del" onclick="removeEntry('${encodeURIComponent(e.id)}')">Delete</button>
        </div>`).join('');
    }

    function editEntry(encId) {
      const id = decodeURIComponent(encId);
      const entry = state.entries.find(e => e.id === id);
      if (!entry) return;
      state.editingId = id;
      document.getElementById('form-title').textContent = 'Edit Entry';
      document.getElementById('save').textContent = 'Save';
      document.getElementById('title').value = entry.title;
      document.getElementById('description').value = entry.description;
      document.getElementById('scheduled_for').value = entry.scheduled_for.split('T')[0];
      document.getElementById('created_at').value = entry.created_at.split('T')[0];
      showView('create');
    }

    async function removeEntry(encId) {
      if (!confirm('Delete this entry?')) return;
      await fetch('/delete/' + encId, { method: 'DELETE' });
      await loadEntries();
    }

    async function saveEntry() {
      const payload = {
        title: document.getElementById('title').value,
        description: document.getElementById('description').value,
        scheduled_for: new Date(document.getElementById('scheduled_for').value).toISOString(),
        created_at: new Date(document.getElementById('created_at').value).toISOString(),
      };
      if (state.editingId) {
        await fetch('/update/' + encodeURIComponent(state.editingId), {
          method: 'PUT',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload),
        });
      } else {
        await fetch('/create/', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload),
        });
      }
      resetForm();
      showView('list');
      await loadEntries();
    }

    async function loadActivity() {
      const res = await fetch('/activity');
      const records = await res.json();
      const el = document.getElementById('activity');
      if (!records.length) { el.textContent = '(no activity)'; return; }
      el.innerHTML = records.map(r => `\n<span class="lvl-${esc(r.level)}">[${esc(r.level)}]</span> ${esc(r.ts)} ${esc(r.message)}`).join('');
    }

    setInterval(loadActivity, 5000);
    window.addEventListener('load', () => { resetForm(); loadEntries(); loadActivity(); });
  </script>
</body>
</html>
"##;
  Html(template.to_string())
}
