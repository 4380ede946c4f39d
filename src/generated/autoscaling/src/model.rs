// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use gaxi::shape::{Marshall, Member, Structure};
use gaxi::transport::ResponseHeaders;
use gaxi::xml::{UnmarshallError, XmlContext, XmlStructure};
use time::OffsetDateTime;

/// The request message for [AutoScaling::describe_auto_scaling_groups][crate::client::AutoScaling::describe_auto_scaling_groups].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeAutoScalingGroupsRequest {
    /// The names of the groups. By default, all the groups are described.
    pub auto_scaling_group_names: Option<Vec<String>>,

    /// The maximum number of items to return with this call. The default
    /// value is `50` and the maximum value is `100`.
    pub max_records: Option<i32>,

    /// The token for the next set of items to return.
    pub next_token: Option<String>,
}

impl DescribeAutoScalingGroupsRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [auto_scaling_group_names][DescribeAutoScalingGroupsRequest::auto_scaling_group_names].
    pub fn set_auto_scaling_group_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.auto_scaling_group_names = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [max_records][DescribeAutoScalingGroupsRequest::max_records].
    pub fn set_max_records<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_records = Some(v.into());
        self
    }

    /// Sets or clears the value of [next_token][DescribeAutoScalingGroupsRequest::next_token].
    pub fn set_or_clear_next_token<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.next_token = v.map(Into::into);
        self
    }

    /// Sets the value of [next_token][DescribeAutoScalingGroupsRequest::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

impl Marshall for DescribeAutoScalingGroupsRequest {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(
                Member::body("AutoScalingGroupNames"),
                &self.auto_scaling_group_names,
            )
            .member(Member::body("MaxRecords"), &self.max_records)
            .member(Member::body("NextToken"), &self.next_token)
    }
}

/// The response message for [AutoScaling::describe_auto_scaling_groups][crate::client::AutoScaling::describe_auto_scaling_groups].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DescribeAutoScalingGroupsResponse {
    /// The groups.
    pub auto_scaling_groups: Option<Vec<AutoScalingGroup>>,

    /// A string that indicates that the response contains more items than can
    /// be returned in a single response.
    pub next_token: Option<String>,
}

impl DescribeAutoScalingGroupsResponse {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [auto_scaling_groups][DescribeAutoScalingGroupsResponse::auto_scaling_groups].
    pub fn set_auto_scaling_groups<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AutoScalingGroup>,
    {
        self.auto_scaling_groups = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [next_token][DescribeAutoScalingGroupsResponse::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }
}

impl XmlStructure for DescribeAutoScalingGroupsResponse {
    fn unmarshall_member(&mut self, name: &str, ctx: &mut XmlContext) -> Result<(), UnmarshallError> {
        match name {
            "AutoScalingGroups" => self.auto_scaling_groups = ctx.field()?,
            "NextToken" => self.next_token = ctx.field()?,
            _ => {}
        }
        Ok(())
    }
}

impl ResponseHeaders for DescribeAutoScalingGroupsResponse {}

/// Describes an Auto Scaling group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct AutoScalingGroup {
    /// The name of the group.
    pub auto_scaling_group_name: Option<String>,

    /// The name of the associated launch configuration.
    pub launch_configuration_name: Option<String>,

    /// The minimum size of the group.
    pub min_size: Option<i32>,

    /// The maximum size of the group.
    pub max_size: Option<i32>,

    /// The desired size of the group.
    pub desired_capacity: Option<i32>,

    /// The duration of the default cooldown period, in seconds.
    pub default_cooldown: Option<i32>,

    /// One or more availability zones for the group.
    pub availability_zones: Option<Vec<String>>,

    /// The date and time the group was created.
    pub created_time: Option<OffsetDateTime>,

    /// The tags for the group.
    pub tags: Option<Vec<TagDescription>>,

    /// The current state of the group when it is being deleted.
    pub status: Option<String>,
}

impl AutoScalingGroup {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [auto_scaling_group_name][AutoScalingGroup::auto_scaling_group_name].
    pub fn set_auto_scaling_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.auto_scaling_group_name = Some(v.into());
        self
    }

    /// Sets the value of [launch_configuration_name][AutoScalingGroup::launch_configuration_name].
    pub fn set_launch_configuration_name<T: Into<String>>(mut self, v: T) -> Self {
        self.launch_configuration_name = Some(v.into());
        self
    }

    /// Sets the value of [min_size][AutoScalingGroup::min_size].
    pub fn set_min_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.min_size = Some(v.into());
        self
    }

    /// Sets the value of [max_size][AutoScalingGroup::max_size].
    pub fn set_max_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_size = Some(v.into());
        self
    }

    /// Sets the value of [desired_capacity][AutoScalingGroup::desired_capacity].
    pub fn set_desired_capacity<T: Into<i32>>(mut self, v: T) -> Self {
        self.desired_capacity = Some(v.into());
        self
    }

    /// Sets the value of [default_cooldown][AutoScalingGroup::default_cooldown].
    pub fn set_default_cooldown<T: Into<i32>>(mut self, v: T) -> Self {
        self.default_cooldown = Some(v.into());
        self
    }

    /// Sets the value of [availability_zones][AutoScalingGroup::availability_zones].
    pub fn set_availability_zones<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.availability_zones = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [created_time][AutoScalingGroup::created_time].
    pub fn set_created_time<T: Into<OffsetDateTime>>(mut self, v: T) -> Self {
        self.created_time = Some(v.into());
        self
    }

    /// Sets the value of [tags][AutoScalingGroup::tags].
    pub fn set_tags<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<TagDescription>,
    {
        self.tags = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [status][AutoScalingGroup::status].
    pub fn set_status<T: Into<String>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }
}

impl XmlStructure for AutoScalingGroup {
    fn unmarshall_member(&mut self, name: &str, ctx: &mut XmlContext) -> Result<(), UnmarshallError> {
        match name {
            "AutoScalingGroupName" => self.auto_scaling_group_name = ctx.field()?,
            "LaunchConfigurationName" => self.launch_configuration_name = ctx.field()?,
            "MinSize" => self.min_size = ctx.field()?,
            "MaxSize" => self.max_size = ctx.field()?,
            "DesiredCapacity" => self.desired_capacity = ctx.field()?,
            "DefaultCooldown" => self.default_cooldown = ctx.field()?,
            "AvailabilityZones" => self.availability_zones = ctx.field()?,
            "CreatedTime" => self.created_time = ctx.field()?,
            "Tags" => self.tags = ctx.field()?,
            "Status" => self.status = ctx.field()?,
            _ => {}
        }
        Ok(())
    }
}

/// Describes a tag for an Auto Scaling group.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct TagDescription {
    /// The name of the group.
    pub resource_id: Option<String>,

    /// The type of resource. The only supported value is
    /// `auto-scaling-group`.
    pub resource_type: Option<String>,

    pub key: Option<String>,

    pub value: Option<String>,

    /// Determines whether the tag is added to new instances as they are
    /// launched in the group.
    pub propagate_at_launch: Option<bool>,
}

impl TagDescription {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [resource_id][TagDescription::resource_id].
    pub fn set_resource_id<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_id = Some(v.into());
        self
    }

    /// Sets the value of [resource_type][TagDescription::resource_type].
    pub fn set_resource_type<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_type = Some(v.into());
        self
    }

    /// Sets the value of [key][TagDescription::key].
    pub fn set_key<T: Into<String>>(mut self, v: T) -> Self {
        self.key = Some(v.into());
        self
    }

    /// Sets the value of [value][TagDescription::value].
    pub fn set_value<T: Into<String>>(mut self, v: T) -> Self {
        self.value = Some(v.into());
        self
    }

    /// Sets the value of [propagate_at_launch][TagDescription::propagate_at_launch].
    pub fn set_propagate_at_launch<T: Into<bool>>(mut self, v: T) -> Self {
        self.propagate_at_launch = Some(v.into());
        self
    }
}

impl XmlStructure for TagDescription {
    fn unmarshall_member(&mut self, name: &str, ctx: &mut XmlContext) -> Result<(), UnmarshallError> {
        match name {
            "ResourceId" => self.resource_id = ctx.field()?,
            "ResourceType" => self.resource_type = ctx.field()?,
            "Key" => self.key = ctx.field()?,
            "Value" => self.value = ctx.field()?,
            "PropagateAtLaunch" => self.propagate_at_launch = ctx.field()?,
            _ => {}
        }
        Ok(())
    }
}

/// The request message for [AutoScaling::create_launch_configuration][crate::client::AutoScaling::create_launch_configuration].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLaunchConfigurationRequest {
    /// The name of the launch configuration. This name must be unique per
    /// region per account.
    pub launch_configuration_name: Option<String>,

    /// The ID of the machine image used to launch the instances.
    pub image_id: Option<String>,

    /// The name of the key pair.
    pub key_name: Option<String>,

    /// The security groups to assign to the instances.
    pub security_groups: Option<Vec<String>>,

    /// The user data to make available to the launched instances. The value
    /// must be base64 encoded.
    pub user_data: Option<String>,

    /// The instance type.
    pub instance_type: Option<String>,

    /// The block device mappings for the instances.
    pub block_device_mappings: Option<Vec<BlockDeviceMapping>>,

    /// Specifies whether to assign a public IP address to each instance.
    pub associate_public_ip_address: Option<bool>,
}

impl CreateLaunchConfigurationRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [launch_configuration_name][CreateLaunchConfigurationRequest::launch_configuration_name].
    pub fn set_launch_configuration_name<T: Into<String>>(mut self, v: T) -> Self {
        self.launch_configuration_name = Some(v.into());
        self
    }

    /// Sets the value of [image_id][CreateLaunchConfigurationRequest::image_id].
    pub fn set_image_id<T: Into<String>>(mut self, v: T) -> Self {
        self.image_id = Some(v.into());
        self
    }

    /// Sets the value of [key_name][CreateLaunchConfigurationRequest::key_name].
    pub fn set_key_name<T: Into<String>>(mut self, v: T) -> Self {
        self.key_name = Some(v.into());
        self
    }

    /// Sets the value of [security_groups][CreateLaunchConfigurationRequest::security_groups].
    pub fn set_security_groups<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.security_groups = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [user_data][CreateLaunchConfigurationRequest::user_data].
    pub fn set_user_data<T: Into<String>>(mut self, v: T) -> Self {
        self.user_data = Some(v.into());
        self
    }

    /// Sets the value of [instance_type][CreateLaunchConfigurationRequest::instance_type].
    pub fn set_instance_type<T: Into<String>>(mut self, v: T) -> Self {
        self.instance_type = Some(v.into());
        self
    }

    /// Sets the value of [block_device_mappings][CreateLaunchConfigurationRequest::block_device_mappings].
    pub fn set_block_device_mappings<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<BlockDeviceMapping>,
    {
        self.block_device_mappings = Some(v.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the value of [associate_public_ip_address][CreateLaunchConfigurationRequest::associate_public_ip_address].
    pub fn set_associate_public_ip_address<T: Into<bool>>(mut self, v: T) -> Self {
        self.associate_public_ip_address = Some(v.into());
        self
    }
}

impl Marshall for CreateLaunchConfigurationRequest {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(
                Member::body("LaunchConfigurationName"),
                &self.launch_configuration_name,
            )
            .member(Member::body("ImageId"), &self.image_id)
            .member(Member::body("KeyName"), &self.key_name)
            .member(Member::body("SecurityGroups"), &self.security_groups)
            .member(Member::body("UserData"), &self.user_data)
            .member(Member::body("InstanceType"), &self.instance_type)
            .member(
                Member::body("BlockDeviceMappings"),
                &self.block_device_mappings,
            )
            .member(
                Member::body("AssociatePublicIpAddress"),
                &self.associate_public_ip_address,
            )
    }
}

/// Describes a block device mapping.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct BlockDeviceMapping {
    /// The name of the virtual device, for example `ephemeral0`.
    pub virtual_name: Option<String>,

    /// The device name exposed to the instance, for example `/dev/sdh`.
    pub device_name: Option<String>,

    /// Parameters used to automatically set up block storage volumes.
    pub ebs: Option<Ebs>,

    /// Setting this value to `true` suppresses the device.
    pub no_device: Option<bool>,
}

impl BlockDeviceMapping {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [virtual_name][BlockDeviceMapping::virtual_name].
    pub fn set_virtual_name<T: Into<String>>(mut self, v: T) -> Self {
        self.virtual_name = Some(v.into());
        self
    }

    /// Sets the value of [device_name][BlockDeviceMapping::device_name].
    pub fn set_device_name<T: Into<String>>(mut self, v: T) -> Self {
        self.device_name = Some(v.into());
        self
    }

    /// Sets the value of [ebs][BlockDeviceMapping::ebs].
    pub fn set_ebs<T: Into<Ebs>>(mut self, v: T) -> Self {
        self.ebs = Some(v.into());
        self
    }

    /// Sets or clears the value of [ebs][BlockDeviceMapping::ebs].
    pub fn set_or_clear_ebs<T: Into<Ebs>>(mut self, v: Option<T>) -> Self {
        self.ebs = v.map(Into::into);
        self
    }

    /// Sets the value of [no_device][BlockDeviceMapping::no_device].
    pub fn set_no_device<T: Into<bool>>(mut self, v: T) -> Self {
        self.no_device = Some(v.into());
        self
    }
}

impl Marshall for BlockDeviceMapping {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::body("VirtualName"), &self.virtual_name)
            .member(Member::body("DeviceName"), &self.device_name)
            .member(Member::body("Ebs"), &self.ebs)
            .member(Member::body("NoDevice"), &self.no_device)
    }
}

/// Describes a block storage volume.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Ebs {
    pub snapshot_id: Option<String>,

    /// The volume size, in GiB.
    pub volume_size: Option<i32>,

    /// The volume type, for example `gp3`.
    pub volume_type: Option<String>,

    pub delete_on_termination: Option<bool>,

    /// The number of I/O operations per second to provision.
    pub iops: Option<i32>,

    pub encrypted: Option<bool>,
}

impl Ebs {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [snapshot_id][Ebs::snapshot_id].
    pub fn set_snapshot_id<T: Into<String>>(mut self, v: T) -> Self {
        self.snapshot_id = Some(v.into());
        self
    }

    /// Sets the value of [volume_size][Ebs::volume_size].
    pub fn set_volume_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.volume_size = Some(v.into());
        self
    }

    /// Sets the value of [volume_type][Ebs::volume_type].
    pub fn set_volume_type<T: Into<String>>(mut self, v: T) -> Self {
        self.volume_type = Some(v.into());
        self
    }

    /// Sets the value of [delete_on_termination][Ebs::delete_on_termination].
    pub fn set_delete_on_termination<T: Into<bool>>(mut self, v: T) -> Self {
        self.delete_on_termination = Some(v.into());
        self
    }

    /// Sets the value of [iops][Ebs::iops].
    pub fn set_iops<T: Into<i32>>(mut self, v: T) -> Self {
        self.iops = Some(v.into());
        self
    }

    /// Sets the value of [encrypted][Ebs::encrypted].
    pub fn set_encrypted<T: Into<bool>>(mut self, v: T) -> Self {
        self.encrypted = Some(v.into());
        self
    }
}

impl Marshall for Ebs {
    fn marshall(&self) -> Structure {
        Structure::new()
            .member(Member::body("SnapshotId"), &self.snapshot_id)
            .member(Member::body("VolumeSize"), &self.volume_size)
            .member(Member::body("VolumeType"), &self.volume_type)
            .member(
                Member::body("DeleteOnTermination"),
                &self.delete_on_termination,
            )
            .member(Member::body("Iops"), &self.iops)
            .member(Member::body("Encrypted"), &self.encrypted)
    }
}

/// The response message for [AutoScaling::create_launch_configuration][crate::client::AutoScaling::create_launch_configuration].
///
/// The service returns no data for this operation.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateLaunchConfigurationResponse {}

impl XmlStructure for CreateLaunchConfigurationResponse {
    fn unmarshall_member(&mut self, _name: &str, _ctx: &mut XmlContext) -> Result<(), UnmarshallError> {
        Ok(())
    }
}

impl ResponseHeaders for CreateLaunchConfigurationResponse {}
