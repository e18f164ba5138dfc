use status_core::HostSnapshot;

/// Renders the static status page. Pure function of the snapshot; the CSS
/// and markup are fixed, only the four host facts vary.
pub fn render(snapshot: &HostSnapshot) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Status Server</title>
  <style>
    * {{
      margin: 0;
      padding: 0;
      box-sizing: border-box;
    }}
    body {{
      font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      min-height: 100vh;
      display: flex;
      justify-content: center;
      align-items: center;
      padding: 20px;
    }}
    .container {{
      background: rgba(255, 255, 255, 0.95);
      border-radius: 20px;
      padding: 40px;
      box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
      max-width: 600px;
      width: 100%;
      backdrop-filter: blur(10px);
    }}
    h1 {{
      color: #667eea;
      margin-bottom: 10px;
      font-size: 2.5em;
      text-align: center;
    }}
    .subtitle {{
      color: #666;
      text-align: center;
      margin-bottom: 30px;
      font-size: 1.1em;
    }}
    .info-card {{
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      padding: 20px;
      border-radius: 10px;
      margin: 20px 0;
    }}
    .info-item {{
      margin: 10px 0;
      display: flex;
      justify-content: space-between;
      align-items: center;
    }}
    .label {{
      font-weight: bold;
      opacity: 0.9;
    }}
    .value {{
      background: rgba(255, 255, 255, 0.2);
      padding: 5px 15px;
      border-radius: 5px;
      font-family: 'Courier New', monospace;
    }}
    .status {{
      text-align: center;
      margin-top: 20px;
      padding: 15px;
      background: #10b981;
      color: white;
      border-radius: 10px;
      font-weight: bold;
      font-size: 1.2em;
    }}
    .footer {{
      text-align: center;
      margin-top: 20px;
      color: #666;
      font-size: 0.9em;
    }}
  </style>
</head>
<body>
  <div class="container">
    <h1>Status Server</h1>
    <p class="subtitle">Host Status &amp; Runtime Information</p>

    <div class="info-card">
      <div class="info-item">
        <span class="label">Hostname:</span>
        <span class="value">{hostname}</span>
      </div>
      <div class="info-item">
        <span class="label">Platform:</span>
        <span class="value">{platform}</span>
      </div>
      <div class="info-item">
        <span class="label">Runtime:</span>
        <span class="value">{runtime}</span>
      </div>
      <div class="info-item">
        <span class="label">Uptime:</span>
        <span class="value">{uptime}s</span>
      </div>
    </div>

    <div class="status">
      Application Running Successfully
    </div>

    <div class="footer">
      Liveness at /health | Build info at /api/info
    </div>
  </div>
</body>
</html>
"#,
        hostname = snapshot.hostname,
        platform = snapshot.platform,
        runtime = snapshot.runtime_version,
        uptime = snapshot.uptime_seconds,
    )
}
