use indoor_ar::{
    flow::{self, FlowConstructor, SceneFlow},
    room::RoomNavigation,
};

fn main() -> anyhow::Result<()> {
    let room: FlowConstructor<()> = Box::new(|ctx| {
        Box::pin(async move {
            let room = RoomNavigation::new(ctx).await?;
            Ok(Box::new(room) as Box<dyn SceneFlow<()>>)
        })
    });

    flow::run(vec![room])
}
