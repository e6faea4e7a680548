use crate::app::AppContext;

pub fn handle_check(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    match store.check_integrity() {
        Ok(()) => {
            if !ctx.quiet() {
                println!("Integrity check: OK");
                println!("- entries: {}", store.count()?);
                println!("- last modified: {}", store.last_modified()?.to_rfc3339());
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("Integrity check: FAILED");
            eprintln!("- error: {}", err);
            eprintln!("Hint: Export the journal before attempting repairs.");
            Err(anyhow::anyhow!("Integrity check failed"))
        }
    }
}
