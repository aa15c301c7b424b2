use axum::{response::Html, routing::get, Router};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Retail Sales Dashboard</title>
  <script src="https://cdn.plot.ly/plotly-2.35.2.min.js" charset="utf-8"></script>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; }
    .header-title { margin-bottom: 1rem; }
    .filter-container { margin-bottom: 1rem; max-width: 420px; }
    label { display: block; margin-bottom: 0.25rem; font-weight: 600; }
    select, input { width: 100%; padding: 0.4rem; }
    .date-range { display: flex; gap: 0.5rem; }
    .chart-container > div { min-height: 420px; border: 1px solid #ddd; border-radius: 8px; margin-bottom: 1rem; }
    #status { color: #b00020; min-height: 1.2rem; }
  </style>
</head>
<body>
  <div class="container">
    <h1 class="header-title">Retail Sales Dashboard</h1>

    <div class="filter-container">
      <label for="region-dropdown">Select Region</label>
      <select id="region-dropdown"></select>
    </div>

    <div class="filter-container">
      <label for="product-dropdown">Select Product</label>
      <select id="product-dropdown"></select>
    </div>

    <div class="filter-container">
      <label>Select Date Range</label>
      <div class="date-range">
        <input id="start-date" type="date" />
        <input id="end-date" type="date" />
      </div>
    </div>

    <div id="status"></div>

    <div class="chart-container">
      <div id="bar-chart"></div>
      <div id="line-chart"></div>
      <div id="pie-chart"></div>
    </div>
  </div>

  <script>
    const region = document.getElementById('region-dropdown');
    const product = document.getElementById('product-dropdown');
    const startDate = document.getElementById('start-date');
    const endDate = document.getElementById('end-date');
    const status = document.getElementById('status');

    function fillSelect(select, values, selected) {
      select.innerHTML = '';
      for (const value of values) {
        const option = document.createElement('option');
        option.value = value;
        option.textContent = value;
        select.appendChild(option);
      }
      select.value = selected;
    }

    function toFigure(spec) {
      const layout = { title: { text: spec.title } };
      const values = spec.data.values;
      if (spec.kind === 'pie') {
        return {
          data: [{ type: 'pie', labels: values.map(s => s.label), values: values.map(s => s.value) }],
          layout,
        };
      }
      layout.xaxis = { title: { text: spec.encoding.x } };
      layout.yaxis = { title: { text: spec.encoding.y } };
      const trace = { x: values.map(p => p.x), y: values.map(p => p.y) };
      if (spec.kind === 'bar') {
        trace.type = 'bar';
      } else {
        trace.type = 'scatter';
        trace.mode = 'lines';
      }
      return { data: [trace], layout };
    }

    function draw(id, spec) {
      const figure = toFigure(spec);
      Plotly.react(id, figure.data, figure.layout, { responsive: true });
    }

    let latestRequest = 0;

    async function updateCharts() {
      const requestId = ++latestRequest;
      const params = new URLSearchParams({
        region: region.value,
        product: product.value,
        start_date: startDate.value,
        end_date: endDate.value,
      });
      try {
        const res = await fetch('/api/charts?' + params.toString());
        const json = await res.json();
        if (requestId !== latestRequest) {
          return;
        }
        if (!res.ok) {
          status.textContent = json.error || 'Request failed';
          return;
        }
        status.textContent = '';
        draw('bar-chart', json.bar);
        draw('line-chart', json.line);
        draw('pie-chart', json.pie);
      } catch (err) {
        if (requestId === latestRequest) {
          status.textContent = 'Failed to load charts: ' + err;
        }
      }
    }

    async function init() {
      let options;
      try {
        const res = await fetch('/api/options');
        if (!res.ok) {
          throw new Error('HTTP ' + res.status);
        }
        options = await res.json();
      } catch (err) {
        status.textContent = 'Failed to load dashboard options: ' + err;
        return;
      }
      fillSelect(region, options.regions, options.default_region);
      fillSelect(product, options.products, options.default_product);
      startDate.value = options.min_date || '';
      endDate.value = options.max_date || '';

      for (const el of [region, product, startDate, endDate]) {
        el.addEventListener('change', updateCharts);
      }
      await updateCharts();
    }

    init();
  </script>
</body>
</html>"#;
