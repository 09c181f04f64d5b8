//! Web page (HTML form over the process endpoint)

use axum::response::Html;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Email Categorizer</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        h1 { color: #2c3e50; }
        .subtitle { color: #7f8c8d; margin-bottom: 25px; }
        label { display: block; margin-bottom: 6px; font-weight: 600; }
        input[type="text"] {
            width: 100%;
            padding: 10px;
            border: 2px solid #ddd;
            border-radius: 6px;
            font-size: 15px;
            box-sizing: border-box;
        }
        .checkboxes { display: flex; gap: 20px; margin: 15px 0; }
        button {
            background: #3498db;
            color: white;
            border: none;
            padding: 12px 24px;
            font-size: 16px;
            border-radius: 6px;
            cursor: pointer;
        }
        button:hover { background: #2980b9; }
        .output {
            background: #f8f9fa;
            border: 1px solid #e9ecef;
            border-radius: 6px;
            padding: 15px;
            margin-top: 25px;
            font-family: monospace;
            font-size: 14px;
            white-space: pre-wrap;
        }
        .error { color: #e74c3c; }
        table { border-collapse: collapse; margin-top: 15px; }
        td, th { border: 1px solid #ddd; padding: 6px 12px; text-align: left; }
    </style>
</head>
<body>
    <h1>Email Categorizer</h1>
    <p class="subtitle">Categorize volunteer application emails by keyword</p>

    <form id="processForm">
        <label for="directory">Email directory</label>
        <input type="text" id="directory" name="directory" placeholder="data/sample_emails">
        <div class="checkboxes">
            <label><input type="checkbox" id="report"> Generate CSV report</label>
            <label><input type="checkbox" id="organize"> Organize into folders</label>
        </div>
        <button type="submit">Process Emails</button>
    </form>

    <div id="output" class="output">Ready to process emails...</div>

    <script>
        document.getElementById('processForm').onsubmit = async (e) => {
            e.preventDefault();
            const output = document.getElementById('output');
            output.textContent = 'Processing...';

            try {
                const response = await fetch('/process', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({
                        directory: document.getElementById('directory').value,
                        generate_report: document.getElementById('report').checked,
                        organize: document.getElementById('organize').checked
                    })
                });
                const result = await response.json();

                if (!result.success) {
                    output.innerHTML = '<span class="error">' + result.error + '</span>';
                    return;
                }

                const data = result.data;
                let lines = ['Batch ' + data.batch_id + ' - ' + data.total + ' emails\n'];
                for (const d of data.decisions) {
                    lines.push(d.email_id + ' -> ' + d.category);
                }
                lines.push('');
                for (const row of data.rows) {
                    lines.push(row.category + ': ' + row.count + ' (' + row.percentage.toFixed(1) + '%)');
                }
                if (data.csv_file) lines.push('\nCSV report: ' + data.csv_file);
                if (data.organized !== null) lines.push('Organized ' + data.organized + ' emails');
                output.textContent = lines.join('\n');
            } catch (err) {
                output.innerHTML = '<span class="error">Network error: ' + err.message + '</span>';
            }
        };
    </script>
</body>
</html>
"#;

/// Landing page (GET /)
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
