use bevy::prelude::*;

fn main() {
    let mut app = App::new();
    runbound::configure_full(&mut app);
    app.run();
}
