use crate::scene::SceneObject;
use crate::styling::ColorGenerator;
use bevy::prelude::*;
use mergium_archive::{ObjectData, ObjectShape};

/// Spawns the renderable entity for one realized object. Objects without an
/// explicit color get a deterministic generated one.
pub fn spawn_object(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    colors: &mut ColorGenerator,
    name: &str,
    data: &ObjectData,
) -> Entity {
    let color = data
        .color
        .map(|[r, g, b]| Color::srgb(r, g, b))
        .unwrap_or_else(|| colors.gen_color());

    let transform = Transform {
        translation: Vec3::from_array(data.position),
        rotation: Quat::from_array(data.rotation),
        ..Default::default()
    };

    commands
        .spawn(PbrBundle {
            mesh: meshes.add(shape_mesh(&data.shape)),
            material: materials.add(color),
            transform,
            ..Default::default()
        })
        .insert(Name::new(name.to_owned()))
        .insert(SceneObject {
            name: name.to_owned(),
            data: data.clone(),
        })
        .id()
}

fn shape_mesh(shape: &ObjectShape) -> Mesh {
    match *shape {
        ObjectShape::Cuboid {
            half_extents: [hx, hy, hz],
        } => Cuboid::new(hx * 2.0, hy * 2.0, hz * 2.0).into(),
        ObjectShape::Ball { radius } => Sphere::new(radius).into(),
        ObjectShape::Capsule {
            radius,
            half_height,
        } => Capsule3d::new(radius, half_height * 2.0).into(),
        ObjectShape::Cylinder {
            radius,
            half_height,
        } => Cylinder::new(radius, half_height * 2.0).into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_and_stored_data_follow_the_definition() {
        let mut world = World::new();
        let mut meshes = Assets::<Mesh>::default();
        let mut materials = Assets::<StandardMaterial>::default();
        let mut colors = ColorGenerator::default();

        let mut data = ObjectData::new(ObjectShape::Ball { radius: 0.5 });
        data.position = [1.0, 2.0, 3.0];
        data.color = Some([0.2, 0.4, 0.6]);

        let mut queue = bevy::ecs::world::CommandQueue::default();
        let entity = {
            let mut commands = Commands::new(&mut queue, &world);
            spawn_object(
                &mut commands,
                &mut meshes,
                &mut materials,
                &mut colors,
                "ball",
                &data,
            )
        };
        queue.apply(&mut world);

        let transform = world.get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, Vec3::new(1.0, 2.0, 3.0));

        let object = world.get::<SceneObject>(entity).unwrap();
        assert_eq!(object.name, "ball");
        assert_eq!(object.data, data);
    }
}
