use passport_audit_api::run;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("passport-audit error: {err}");
        std::process::exit(if err.is_usage_fault() { 2 } else { 1 });
    }
}
