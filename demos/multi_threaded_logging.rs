use std::sync::mpsc::channel;

fn main() {
    tintlog::init().expect("logger already installed");
    tintlog::name_current_thread("main");
    log::info!("Hello, world!");

    // mirror everything at info and above to a capped log directory
    tintlog::set_max_files_in_dir(5);
    let log_file = tintlog::log_to_dir("/tmp/tintlog-demo", "demo")
        .expect("log directory unavailable");

    let (handles, senders): (Vec<_>, Vec<_>) = (0..5)
        .map(|i| {
            let (sender, receiver) = channel::<&'static str>();
            (
                std::thread::spawn(move || {
                    tintlog::name_current_thread(&format!("worker {i}"));
                    for message in receiver {
                        log::warn!("[demo] message received: {message}");
                    }
                }),
                sender,
            )
        })
        .unzip();
    for sender in senders {
        sender.send("Hello, world!").unwrap();
    }
    for handle in handles {
        handle.join().unwrap();
    }

    log::info!(
        "last line of {} is:\n\t{}",
        log_file.display(),
        std::fs::read_to_string(&log_file)
            .unwrap()
            .trim_end()
            .lines()
            .last()
            .unwrap()
    );
}
