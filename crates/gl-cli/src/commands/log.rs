use super::Session;

pub fn run(session: &Session, format: &str) -> Result<(), String> {
    let c = session.active();
    let out = match format {
        "text" => c.xp_log.export_text(&c.name),
        "markdown" | "md" => c.xp_log.export_markdown(&c.name),
        other => return Err(format!("unknown log format '{other}'. Use text or markdown")),
    };
    print!("{out}");
    Ok(())
}
