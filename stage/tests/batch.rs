use stage::{BatchError, BatchOutcome, BatchProcessor};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Default)]
struct Tally {
    seen: Vec<String>,
}

#[test]
fn setlist_runs_in_order() {
    init();
    let songs = ["Melt", "World is Mine", "Rolling Girl"];
    let mut ctx = Tally::default();
    let result = BatchProcessor::new().run(
        songs,
        |song, ctx: &mut Tally| {
            ctx.seen.push(format!("[{}] {song}", ctx.seen.len() + 1));
            Ok::<_, String>(())
        },
        &mut ctx,
    );
    assert_eq!(result, Ok(()));
    assert_eq!(ctx.seen, ["[1] Melt", "[2] World is Mine", "[3] Rolling Girl"]);
}

#[test]
fn stops_on_first_failure() {
    init();
    let mut ctx = Tally::default();
    let result = BatchProcessor::new().run(
        ["a", "b", "c"],
        |item, ctx: &mut Tally| {
            ctx.seen.push(item.to_string());
            if item == "b" {
                Err(format!("{item} went wrong"))
            } else {
                Ok(())
            }
        },
        &mut ctx,
    );
    assert_eq!(result, Err(BatchError));
    assert_eq!(ctx.seen, ["a", "b"]);
}

#[test]
fn processor_is_reusable() {
    init();
    let batch = BatchProcessor::default();
    let mut first = 0usize;
    let mut second = 0usize;
    let count = |_: u8, n: &mut usize| -> Result<(), ()> {
        *n += 1;
        Ok(())
    };
    assert_eq!(batch.drive([1, 2], count, &mut first), BatchOutcome::AllSucceeded { processed: 2 });
    assert_eq!(batch.drive([3, 4, 5], count, &mut second), BatchOutcome::AllSucceeded { processed: 3 });
    assert_eq!((first, second), (2, 3));
}
